//! Wiring between configuration, the dispatcher and the reporters.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env parsing into a validated [`config::CliConfig`].
//! - [`report`] - text and JSON [`report::Reporter`]s.
//! - [`telemetry`] - `tracing-subscriber` setup.

pub mod config;
pub mod report;
pub mod telemetry;
#[cfg(test)]
mod tests;

use config::CliConfig;
use report::Reporter;
use tranche::DispatchError;

/// Counts of what happened during one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub dispatched: usize,
    pub rejected: usize,
    /// `true` if `--fail-fast` cut the run short.
    pub stopped_early: bool,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.rejected == 0
    }
}

/// Dispatches every configured amount in order through the shared chain and
/// hands each outcome to `reporter`.
///
/// # Errors
///
/// Only I/O failures from the reporter; rejected amounts are reported and
/// counted, not propagated.
pub fn run(config: &CliConfig, reporter: &mut dyn Reporter) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for &requested in &config.amounts {
        match config.dispatcher.dispatch(requested) {
            Ok(result) => {
                tracing::debug!(requested, records = result.len(), "dispatched");
                reporter.report(&result)?;
                summary.dispatched += 1;
            }
            Err(err) => {
                if let DispatchError::UnresolvedRemainder { .. } = err {
                    tracing::error!(error = %err, "unit sizes cannot resolve this amount");
                }
                reporter.reject(requested, &err)?;
                summary.rejected += 1;
                if config.fail_fast {
                    summary.stopped_early = true;
                    break;
                }
            }
        }
    }

    Ok(summary)
}
