mod app;

use std::io::{self, Write};
use std::process::ExitCode;

use app::config::{CliArgs, CliConfig, OutputFormat};
use app::report::{JsonReporter, Reporter, TextReporter};
use app::telemetry::init_telemetry;
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;
    let config = CliConfig::try_from(args)?;

    log_startup_info(&config);

    let stdout = io::stdout().lock();
    let summary = match config.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(stdout, config.noun.clone());
            let summary = app::run(&config, &mut reporter as &mut dyn Reporter)?;
            reporter.into_inner().flush()?;
            summary
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(stdout);
            let summary = app::run(&config, &mut reporter as &mut dyn Reporter)?;
            reporter.into_inner().flush()?;
            summary
        }
    };

    tracing::info!(
        dispatched = summary.dispatched,
        rejected = summary.rejected,
        stopped_early = summary.stopped_early,
        "run finished"
    );

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn log_startup_info(config: &CliConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting with full config: {:#?}", config);
    } else {
        let units: Vec<u64> = config.dispatcher.chain().units().map(|u| u.get()).collect();
        tracing::debug!(
            "Starting with units {:?} and {} amounts",
            units,
            config.amounts.len()
        );
    }
}
