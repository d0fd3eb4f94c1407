// Launch Dash Core Library
// Launch records dataset, chart aggregation and reactive dashboard runtime

pub mod aggregate;
pub mod dashboard;
pub mod dataset;
pub mod telemetry;

// Export core types
pub use aggregate::{
    aggregate_outcomes, aggregate_scatter, ChartDescriptor, FilterSelection, PayloadRange,
    PieChart, ScatterChart, SiteFilter,
};
pub use dashboard::{CallbackRegistry, DashboardConfig, DashboardLayout, DashboardServer};
pub use dataset::{DataLoadError, Dataset, LaunchRecord};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset error: {0}")]
    DataLoad(#[from] DataLoadError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
