//! Terminal fallback: drop the prompt into the workspace as a Cursor
//! command file.
//!
//! The only way this strategy fails is an unwritable filesystem, which is
//! also the only way the dispatcher as a whole can fail.

use async_trait::async_trait;
use chrono::Utc;
use std::fs;
use std::sync::Arc;

use super::clipboard::Clipboard;
use super::{DeliveryContext, DeliveryOutcome, DeliveryStrategy};

pub struct FileDropDelivery {
    clipboard: Arc<dyn Clipboard>,
}

impl FileDropDelivery {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self { clipboard }
    }
}

#[async_trait]
impl DeliveryStrategy for FileDropDelivery {
    fn name(&self) -> &'static str {
        "file drop"
    }

    async fn attempt(&self, payload: &str, ctx: &DeliveryContext) -> DeliveryOutcome {
        let commands_dir = ctx.workspace.join(".cursor").join("commands");
        if let Err(e) = fs::create_dir_all(&commands_dir) {
            return DeliveryOutcome::failure(format!(
                "could not create {}: {e}",
                commands_dir.display()
            ));
        }

        // Timestamped name so repeated runs never clobber each other.
        let command_file = commands_dir.join(format!("auto_generate_{}.md", Utc::now().timestamp()));
        let contents = format!("# Auto-Generated Command\n\n{payload}\n");
        if let Err(e) = fs::write(&command_file, contents) {
            return DeliveryOutcome::failure(format!(
                "could not write {}: {e}",
                command_file.display()
            ));
        }

        // Clipboard staging is best effort here; the file on disk is the
        // deliverable.
        match self.clipboard.stage(payload).await {
            Ok(()) => DeliveryOutcome::success(format!(
                "prompt saved to {} and copied to the clipboard",
                command_file.display()
            )),
            Err(e) => {
                tracing::debug!("clipboard staging failed after file drop: {e}");
                DeliveryOutcome::success(format!("prompt saved to {}", command_file.display()))
            }
        }
    }
}
