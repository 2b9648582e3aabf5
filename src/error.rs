use std::path::PathBuf;
use thiserror::Error;

use crate::delivery::StrategyFailure;

/// Fatal errors that terminate a run with a non-zero exit.
///
/// Per-strategy delivery failures are not represented here: the dispatcher
/// records them and keeps going. Only an unloadable SDK description or the
/// exhaustion of every delivery channel ends the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("SDK description not found at {}", .0.display())]
    MissingInput(PathBuf),

    #[error("invalid JSON in {}", .path.display())]
    InvalidInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("all delivery methods failed ({})", format_failures(.failures))]
    AllDeliveryFailed { failures: Vec<StrategyFailure> },
}

fn format_failures(failures: &[StrategyFailure]) -> String {
    failures
        .iter()
        .map(|f| f.strategy)
        .collect::<Vec<_>>()
        .join(", ")
}
