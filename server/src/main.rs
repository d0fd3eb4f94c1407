use std::sync::Arc;

use launch_dash_core::dashboard::{DashboardConfig, DashboardServer};
use launch_dash_core::{telemetry, Dataset};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    // Load configuration (defaults + env + optional TOML overlay); a broken
    // TOML file falls back to env defaults and is reported once logging is up
    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (DashboardConfig::from_env(), Some(e)),
    };
    telemetry::init_tracing(config.debug)?;
    if let Some(e) = config_error {
        warn!(target: "launch_dash_server", error = %e, "Ignoring config file; using defaults/env");
    }

    info!(
        target: "launch_dash_server",
        dataset = %config.dataset_path.display(),
        debug = config.debug,
        "Starting launch records dashboard"
    );

    // The dataset is read once; nothing is served if it cannot be loaded
    let dataset = match Dataset::load(&config.dataset_path) {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!(target: "launch_dash_server", error = %e, "Failed to load dataset");
            return Err(e.into());
        }
    };

    let server = DashboardServer::new(config, dataset);

    tokio::select! {
        result = server.serve() => {
            if let Err(e) = result {
                error!(target: "launch_dash_server", error = %e, "Dashboard error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!(target: "launch_dash_server", "Shutdown signal received");
        }
    }

    Ok(())
}
