// Chart aggregation
//
// Pure functions from (dataset, filter selection) to chart descriptors.

mod outcomes;
mod scatter;

pub use outcomes::{aggregate_outcomes, PieChart, FAILURE_LABEL, SUCCESS_LABEL};
pub use scatter::{
    aggregate_scatter, assign_colors, CategoryColor, MarkerStyle, ScatterChart, ScatterPoint,
    PALETTE,
};

use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "every site" sentinel
pub const ALL_SITES: &str = "ALL";

/// Launch site selection: the `ALL` sentinel or one exact site name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    All,
    Site(String),
}

impl SiteFilter {
    /// Exact, case-sensitive match against a launch site
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(name) => name == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteFilter::All => ALL_SITES,
            SiteFilter::Site(name) => name,
        }
    }
}

impl Default for SiteFilter {
    fn default() -> Self {
        SiteFilter::All
    }
}

impl From<&str> for SiteFilter {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value.to_string())
        }
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(value)
        }
    }
}

impl From<SiteFilter> for String {
    fn from(value: SiteFilter) -> Self {
        match value {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload mass range in kilograms, `[low, high]` on the wire
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// The full observed payload range of a dataset
    pub fn full(dataset: &Dataset) -> Self {
        Self::new(dataset.min_payload(), dataset.max_payload())
    }

    /// A reversed or NaN range contains nothing
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// Current control values, rebuilt on every interaction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub site: SiteFilter,
    pub payload_range: PayloadRange,
}

impl FilterSelection {
    pub fn new(site: impl Into<SiteFilter>, payload_range: PayloadRange) -> Self {
        Self {
            site: site.into(),
            payload_range,
        }
    }

    /// Default control state: every site, full payload range
    pub fn initial(dataset: &Dataset) -> Self {
        Self::new(SiteFilter::All, PayloadRange::full(dataset))
    }
}

/// Declarative chart handed to the renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDescriptor {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartDescriptor {
    pub fn title(&self) -> &str {
        match self {
            ChartDescriptor::Pie(chart) => &chart.title,
            ChartDescriptor::Scatter(chart) => &chart.title,
        }
    }

    /// Plotly `{data, layout}` figure for the browser renderer
    pub fn to_figure(&self) -> serde_json::Value {
        match self {
            ChartDescriptor::Pie(chart) => chart.to_figure(),
            ChartDescriptor::Scatter(chart) => chart.to_figure(),
        }
    }
}

impl From<PieChart> for ChartDescriptor {
    fn from(chart: PieChart) -> Self {
        ChartDescriptor::Pie(chart)
    }
}

impl From<ScatterChart> for ChartDescriptor {
    fn from(chart: ScatterChart) -> Self {
        ChartDescriptor::Scatter(chart)
    }
}
