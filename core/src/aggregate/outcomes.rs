// Success/failure counts for the pie chart

use super::SiteFilter;
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

pub const SUCCESS_LABEL: &str = "Successful Launches";
pub const FAILURE_LABEL: &str = "Failed Launches";

const PIE_HOLE: f64 = 0.3;

/// Success vs. failure counts for one site filter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub title: String,
    /// Donut hole as a fraction of the radius
    pub hole: f64,
}

impl PieChart {
    pub fn success_count(&self) -> u64 {
        self.values.first().copied().unwrap_or(0)
    }

    pub fn failure_count(&self) -> u64 {
        self.values.get(1).copied().unwrap_or(0)
    }

    pub fn to_figure(&self) -> serde_json::Value {
        json!({
            "data": [{
                "type": "pie",
                "labels": self.labels,
                "values": self.values,
                "hole": self.hole,
            }],
            "layout": {
                "title": { "text": self.title },
            },
        })
    }
}

/// Count successful and failed launches, optionally restricted to one site.
///
/// An unknown site yields `[0, 0]`.
pub fn aggregate_outcomes(dataset: &Dataset, site: &SiteFilter) -> PieChart {
    let (total, success) = dataset
        .rows_for_site(site)
        .fold((0u64, 0u64), |(total, success), record| {
            (total + 1, success + u64::from(record.class))
        });
    let failure = total - success;

    debug!(
        target: "aggregate",
        site = %site,
        success,
        failure,
        "Aggregated launch outcomes"
    );

    PieChart {
        labels: vec![SUCCESS_LABEL.to_string(), FAILURE_LABEL.to_string()],
        values: vec![success, failure],
        title: format!("Launch Successes by {}", site),
        hole: PIE_HOLE,
    }
}
