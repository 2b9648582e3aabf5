//! Sequential strategy iteration: first success wins.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::clipboard::PasteboardClipboard;
use super::{
    AutomationDelivery, Clipboard, CliDelivery, DeliveryContext, DeliveryStrategy,
    FileDropDelivery,
};
use crate::subprocess::SubprocessManager;

/// Why one strategy gave up.
#[derive(Debug, Clone)]
pub struct StrategyFailure {
    pub strategy: &'static str,
    pub reason: String,
}

impl std::fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} method failed: {}", self.strategy, self.reason)
    }
}

/// Outcome of a full dispatch: which strategy landed the prompt (if any)
/// and the diagnostics collected from everything tried before it.
#[derive(Debug)]
pub struct DeliveryReport {
    pub delivered_via: Option<&'static str>,
    pub detail: String,
    pub failures: Vec<StrategyFailure>,
}

impl DeliveryReport {
    pub fn delivered(&self) -> bool {
        self.delivered_via.is_some()
    }
}

pub struct Dispatcher {
    strategies: Vec<Box<dyn DeliveryStrategy>>,
}

impl Dispatcher {
    pub fn new(strategies: Vec<Box<dyn DeliveryStrategy>>) -> Self {
        Self { strategies }
    }

    /// The production strategy order: accessibility scripting first, the
    /// cursor CLI second, the workspace file drop last.
    pub fn production(subprocess: &SubprocessManager) -> Self {
        let runner = subprocess.runner();
        let clipboard: Arc<dyn Clipboard> =
            Arc::new(PasteboardClipboard::new(Arc::clone(&runner)));

        Self::new(vec![
            Box::new(AutomationDelivery::new(
                Arc::clone(&runner),
                Arc::clone(&clipboard),
            )),
            Box::new(CliDelivery::new(runner)),
            Box::new(FileDropDelivery::new(clipboard)),
        ])
    }

    /// Try each strategy in order, stopping at the first success. Failures
    /// are recorded, never propagated; an empty `delivered_via` in the
    /// report means everything was exhausted.
    pub async fn dispatch(&self, payload: &str, ctx: &DeliveryContext) -> DeliveryReport {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            info!("Trying {} delivery", strategy.name());
            let outcome = strategy.attempt(payload, ctx).await;

            if outcome.delivered {
                debug!("{} delivery succeeded: {}", strategy.name(), outcome.detail);
                return DeliveryReport {
                    delivered_via: Some(strategy.name()),
                    detail: outcome.detail,
                    failures,
                };
            }

            warn!("{} delivery failed: {}", strategy.name(), outcome.error);
            failures.push(StrategyFailure {
                strategy: strategy.name(),
                reason: outcome.error,
            });
        }

        DeliveryReport {
            delivered_via: None,
            detail: String::new(),
            failures,
        }
    }
}
