// Dashboard configuration: defaults, env vars and an optional TOML overlay

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "SpaceX Launch Records Dashboard";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Dashboard configuration
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    /// Verbose logging
    pub debug: bool,
    pub dataset_path: PathBuf,
    /// Page heading
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            debug: false,
            dataset_path: PathBuf::from("spacex_launch_dash.csv"),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("LAUNCH_DASH_HOST")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(default.host),
            port: std::env::var("LAUNCH_DASH_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default.port),
            debug: std::env::var("LAUNCH_DASH_DEBUG")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.debug),
            dataset_path: std::env::var("LAUNCH_DASH_DATA")
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.dataset_path),
            title: std::env::var("LAUNCH_DASH_TITLE")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(default.title),
        }
    }

    /// Load configuration from a TOML file (path via LAUNCH_DASH_CONFIG or ./launch_dash.toml),
    /// overlaying values onto env-driven defaults.
    ///
    /// A missing file is not an error. On a broken file the caller decides how to fall back,
    /// typically to `from_env()` once logging is up to report the error.
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var("LAUNCH_DASH_CONFIG").unwrap_or_else(|_| "launch_dash.toml".into());
        Self::load_from(Path::new(&path), Self::from_env())
    }

    /// Overlay the TOML file at `path` onto `base`. A missing file returns `base` unchanged.
    pub fn load_from(path: &Path, base: Self) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(target: "dashboard", path = %path.display(), "No TOML config found; using defaults/env");
            return Ok(base);
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay =
            toml::from_str::<DashboardToml>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(overlay.overlay(base))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.addr().parse().ok()
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct DashboardToml {
    pub server: Option<ServerToml>,
    pub data: Option<DataToml>,
    pub title: Option<String>,
}

impl DashboardToml {
    fn overlay(self, mut base: DashboardConfig) -> DashboardConfig {
        if let Some(s) = self.server {
            s.apply(&mut base);
        }
        if let Some(d) = self.data {
            if let Some(p) = d.path {
                base.dataset_path = p;
            }
        }
        if let Some(t) = self.title {
            base.title = t;
        }
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct ServerToml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: Option<bool>,
}

impl ServerToml {
    fn apply(self, c: &mut DashboardConfig) {
        if let Some(v) = self.host {
            c.host = v;
        }
        if let Some(v) = self.port {
            c.port = v;
        }
        if let Some(v) = self.debug {
            c.debug = v;
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct DataToml {
    pub path: Option<PathBuf>,
}
