use std::io::{self, Write};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// Rotating "Processing..." indicator drawn on a single terminal line
/// while a request is in flight.
pub struct Spinner {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Spinner {
    pub fn start() -> Self {
        Self::start_with(io::stdout(), FRAME_INTERVAL)
    }

    pub fn start_with<W>(mut out: W, interval: Duration) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                // Output errors only cost us the animation.
                let _ = write!(out, "\rProcessing... {}", frame);
                let _ = out.flush();

                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = tokio::time::sleep(interval) => {}
                }
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle,
        }
    }

    /// Signals the task and waits for it, so nothing is drawn once this returns.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.handle.await {
            log::warn!("progress indicator task failed: {}", e);
        }
    }
}
