use std::io::{IsTerminal, Write};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, SPINNER_FRAME_INTERVAL_MS};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal loading indicator shown while an analysis is being fetched.
/// Draws on stderr so rendered reports on stdout stay clean; when stderr is
/// not a terminal it only logs the start and end lines.
pub struct AnimatedLogger {
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn start(message: &str) -> Self {
        if !std::io::stderr().is_terminal() {
            log::info!("⏳ {}", message);
            return Self { stop_sender: None, task_handle: None };
        }

        let (stop_tx, mut stop_rx) = oneshot::channel();
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(sleep_duration_millis(SPINNER_FRAME_INTERVAL_MS));
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut stderr = std::io::stderr();
                        let _ = write!(stderr, "\r{} {} ", frame, message);
                        let _ = stderr.flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        Self {
            stop_sender: Some(stop_tx),
            task_handle: Some(handle),
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish("✅", final_message).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish("❌", error_message).await;
    }

    async fn finish(&mut self, marker: &str, text: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        match self.task_handle.take() {
            Some(handle) => {
                let _ = handle.await;
                let mut stderr = std::io::stderr();
                let _ = writeln!(stderr, "\r\x1b[K{} {}", marker, text);
                let _ = stderr.flush();
            }
            None => log::info!("{} {}", marker, text),
        }
    }
}
