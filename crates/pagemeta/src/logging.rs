// ABOUTME: tracing subscriber setup for the pagemeta binary.
// ABOUTME: Logs go to stderr so stdout carries only JSON output.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Initialise the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Later calls are no-ops.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = INIT.set(());
    Ok(())
}
