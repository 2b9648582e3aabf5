//! The shared clipboard staging area.
//!
//! Both the automation and file-drop strategies stage the payload here, so
//! the clipboard is an explicit dependency they receive rather than an
//! ambient side channel; tests substitute a fake.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::subprocess::{ProcessCommandBuilder, ProcessError, ProcessRunner};

/// Staging must be quick; anything slower than this is treated as a hang.
pub const STAGE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard staging is only supported on macOS")]
    Unsupported,

    #[error("pbcopy exited with code {0}")]
    ExitCode(i32),

    #[error(transparent)]
    Process(#[from] ProcessError),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn stage(&self, payload: &str) -> Result<(), ClipboardError>;
}

/// Production clipboard backed by the system pasteboard via `pbcopy`.
pub struct PasteboardClipboard {
    runner: Arc<dyn ProcessRunner>,
}

impl PasteboardClipboard {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Clipboard for PasteboardClipboard {
    async fn stage(&self, payload: &str) -> Result<(), ClipboardError> {
        if !cfg!(target_os = "macos") {
            return Err(ClipboardError::Unsupported);
        }

        let command = ProcessCommandBuilder::new("pbcopy")
            .stdin(payload.to_string())
            .timeout(STAGE_TIMEOUT)
            .build();

        let output = self.runner.run(command).await?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ClipboardError::ExitCode(output.status.code().unwrap_or(-1)))
        }
    }
}
