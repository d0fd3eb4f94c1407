// Logging setup
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::DashboardError;

const DEFAULT_FILTER: &str = "info,launch_dash_core=info,launch_dash_server=info";
const DEBUG_FILTER: &str = "debug,launch_dash_core=debug,launch_dash_server=debug";

/// Default filter directives when RUST_LOG is unset
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize the global tracing subscriber.
///
/// RUST_LOG takes precedence; otherwise `debug_enabled` selects verbose defaults.
pub fn init_tracing(debug_enabled: bool) -> crate::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter(debug_enabled)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| DashboardError::Telemetry(e.to_string()))?;

    info!(target: "telemetry", verbose = debug_enabled, "Tracing initialized");
    Ok(())
}
