//! Log output setup.
//!
//! Events from the binary and from the `tranche` library (spans around chain
//! builds and dispatches) are printed to stderr, so stdout only carries
//! reports. Verbosity follows `RUST_LOG` and defaults to `info`; use
//! `RUST_LOG=tranche=trace` to see every stage allocation.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
