//! Programmatic delivery through the `cursor` command-line entry point.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{DeliveryContext, DeliveryOutcome, DeliveryStrategy};
use crate::subprocess::{ProcessCommandBuilder, ProcessError, ProcessRunner};

pub const CLI_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CliDelivery {
    runner: Arc<dyn ProcessRunner>,
}

impl CliDelivery {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl DeliveryStrategy for CliDelivery {
    fn name(&self) -> &'static str {
        "cursor cli"
    }

    async fn attempt(&self, payload: &str, _ctx: &DeliveryContext) -> DeliveryOutcome {
        let command = ProcessCommandBuilder::new("cursor")
            .arg("--command")
            .arg(payload)
            .timeout(CLI_TIMEOUT)
            .build();

        match self.runner.run(command).await {
            Ok(output) if output.status.success() => {
                DeliveryOutcome::success(output.stdout.trim().to_string())
            }
            Ok(output) => {
                let message = if output.stderr.trim().is_empty() {
                    format!(
                        "cursor exited with code {}",
                        output.status.code().unwrap_or(-1)
                    )
                } else {
                    output.stderr.trim().to_string()
                };
                DeliveryOutcome::failure(message)
            }
            Err(ProcessError::CommandNotFound(_)) => {
                DeliveryOutcome::failure("cursor CLI not available")
            }
            Err(ProcessError::Timeout(duration)) => {
                DeliveryOutcome::failure(format!("cursor CLI timed out after {duration:?}"))
            }
            Err(e) => DeliveryOutcome::failure(e.to_string()),
        }
    }
}
