//! UI-automation delivery through macOS accessibility scripting.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::clipboard::Clipboard;
use super::{DeliveryContext, DeliveryOutcome, DeliveryStrategy};
use crate::subprocess::{ProcessCommandBuilder, ProcessError, ProcessRunner};

/// The script drives keystrokes with generous delays, so it gets the
/// longest budget of the three strategies.
pub const AUTOMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Brings Cursor frontmost, opens the composer, then select-all + paste +
/// submit. The payload itself travels via the clipboard.
const COMPOSER_SCRIPT: &str = r#"
tell application "Cursor"
    activate
end tell

delay 0.5

tell application "System Events"
    tell process "Cursor"
        -- Open Composer with Cmd+I
        key code 34 using {command down}
        delay 1.5

        -- Clear any existing text
        keystroke "a" using {command down}
        delay 0.2

        -- Paste from clipboard
        keystroke "v" using {command down}
        delay 0.5

        -- Press Enter to execute
        key code 36
    end tell
end tell
"#;

pub struct AutomationDelivery {
    runner: Arc<dyn ProcessRunner>,
    clipboard: Arc<dyn Clipboard>,
}

impl AutomationDelivery {
    pub fn new(runner: Arc<dyn ProcessRunner>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { runner, clipboard }
    }
}

#[async_trait]
impl DeliveryStrategy for AutomationDelivery {
    fn name(&self) -> &'static str {
        "ui automation"
    }

    async fn attempt(&self, payload: &str, _ctx: &DeliveryContext) -> DeliveryOutcome {
        if let Err(e) = self.clipboard.stage(payload).await {
            return DeliveryOutcome::failure(format!("failed to copy prompt to clipboard: {e}"));
        }

        let command = ProcessCommandBuilder::new("osascript")
            .args(["-e", COMPOSER_SCRIPT])
            .timeout(AUTOMATION_TIMEOUT)
            .build();

        match self.runner.run(command).await {
            Ok(output) if output.status.success() => DeliveryOutcome::success(
                "prompt copied to clipboard and pasted into the composer",
            ),
            Ok(output) => {
                let message = if output.stderr.trim().is_empty() {
                    output.stdout
                } else {
                    output.stderr
                };
                let message = if message.trim().is_empty() {
                    "automation script failed".to_string()
                } else {
                    message.trim().to_string()
                };

                // Missing accessibility permission has a fix the user can
                // apply; call it out instead of echoing the raw stderr.
                if message.to_lowercase().contains("not allowed assistive access") {
                    DeliveryOutcome::failure(
                        "accessibility permissions required: grant your terminal access in \
                         System Preferences > Security & Privacy > Accessibility",
                    )
                } else {
                    DeliveryOutcome::failure(message)
                }
            }
            Err(ProcessError::Timeout(duration)) => {
                DeliveryOutcome::failure(format!("automation script timed out after {duration:?}"))
            }
            Err(e) => DeliveryOutcome::failure(e.to_string()),
        }
    }
}
