//! Delivery of the rendered prompt to Cursor.
//!
//! Three strategies share one functional contract (attempt the payload,
//! report an outcome) and are tried strictly in order by the [`Dispatcher`]:
//! accessibility scripting, the `cursor` CLI, then a file drop into the
//! workspace. Each strategy is retry-safe after a prior one failed; the
//! only shared state is the clipboard, which every user re-stages.

pub mod automation;
pub mod cli;
pub mod clipboard;
pub mod dispatcher;
pub mod file_drop;

pub use automation::AutomationDelivery;
pub use cli::CliDelivery;
pub use clipboard::{Clipboard, ClipboardError, PasteboardClipboard};
pub use dispatcher::{DeliveryReport, Dispatcher, StrategyFailure};
pub use file_drop::FileDropDelivery;

use async_trait::async_trait;
use std::path::PathBuf;

/// Context shared by every delivery attempt.
#[derive(Debug, Clone)]
pub struct DeliveryContext {
    /// Workspace the fallback strategy drops files into.
    pub workspace: PathBuf,
}

/// Result of one strategy's attempt. Strategies never panic or propagate
/// errors; whatever went wrong is captured in `error`.
#[derive(Debug, Clone, Default)]
pub struct DeliveryOutcome {
    pub delivered: bool,
    pub detail: String,
    pub error: String,
}

impl DeliveryOutcome {
    pub fn success(detail: impl Into<String>) -> Self {
        Self {
            delivered: true,
            detail: detail.into(),
            error: String::new(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            delivered: false,
            detail: String::new(),
            error: error.into(),
        }
    }
}

/// One concrete mechanism for handing the prompt to Cursor.
#[async_trait]
pub trait DeliveryStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn attempt(&self, payload: &str, ctx: &DeliveryContext) -> DeliveryOutcome;
}
