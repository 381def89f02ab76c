use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::ChatError;

/// Append-only conversation log. The file is opened and closed on every
/// append; no handle is held between turns.
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
}

impl Transcript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, input: &str, output: &str) -> Result<(), ChatError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(input, output).as_bytes())?;
        Ok(())
    }
}

pub fn format_entry(input: &str, output: &str) -> String {
    format!("User: {}\nOllama: {}\n\n", input, output)
}
