pub mod client;
pub mod options;
pub mod types;

pub use client::*;
pub use options::*;
pub use types::*;
