// Dashboard module - reactive launch records UI
//
// Serves a single page whose controls post their values back to chart
// callbacks; each callback recomputes one chart from the shared dataset.

mod api;
mod callbacks;
mod config;
mod layout;
mod static_assets;

pub use api::DashboardServer;
pub use callbacks::{CallbackRegistry, ChartCallback, PayloadScatterCallback, SuccessPieCallback};
pub use config::{ConfigError, DashboardConfig, DEFAULT_TITLE};
pub use layout::{
    Component, DashboardLayout, DropdownOption, SliderMark, PAYLOAD_SLIDER, PIE_CHART,
    SCATTER_CHART, SITE_DROPDOWN,
};
