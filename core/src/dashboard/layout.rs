// Static control layout served to the dashboard page

use crate::aggregate::{PayloadRange, ALL_SITES};
use crate::dataset::Dataset;
use serde::{Deserialize, Serialize};

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_CHART: &str = "success-pie-chart";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARK_SPACING: f64 = 2500.0;
/// Upper bound on interior slider marks, whatever the payload spread
const MAX_SLIDER_MARKS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub components: Vec<Component>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    Label {
        text: String,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        /// `None` means continuous: the bounds are off the fixed step grid
        step: Option<f64>,
        marks: Vec<SliderMark>,
        value: PayloadRange,
    },
    Graph {
        id: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl DashboardLayout {
    /// Build the page layout; dropdown options and slider bounds come from the dataset
    pub fn for_dataset(dataset: &Dataset, title: impl Into<String>) -> Self {
        let title = title.into();

        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let components = vec![
            Component::Heading {
                text: title.clone(),
            },
            Component::Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            },
            Component::Graph {
                id: PIE_CHART.to_string(),
            },
            Component::Label {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: dataset.min_payload(),
                max: dataset.max_payload(),
                step: slider_step(dataset.min_payload(), dataset.max_payload()),
                marks: slider_marks(dataset.min_payload(), dataset.max_payload()),
                value: PayloadRange::full(dataset),
            },
            Component::Graph {
                id: SCATTER_CHART.to_string(),
            },
        ];

        Self { title, components }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == Some(id))
    }
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::RangeSlider { id, .. }
            | Component::Graph { id } => Some(id.as_str()),
            Component::Heading { .. } | Component::Label { .. } => None,
        }
    }
}

/// The fixed step only when both bounds sit on its grid, so the upper bound stays selectable
fn slider_step(min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if span > 0.0 && span % SLIDER_STEP == 0.0 {
        Some(SLIDER_STEP)
    } else {
        None
    }
}

/// Bounds plus every multiple of the mark spacing between them.
///
/// Wide ranges widen the spacing to a multiple of the base spacing so the
/// interior mark count stays at or below `MAX_SLIDER_MARKS`.
fn slider_marks(min: f64, max: f64) -> Vec<SliderMark> {
    let span = (max - min).max(0.0);
    let multiple = (span / SLIDER_MARK_SPACING / MAX_SLIDER_MARKS).ceil().max(1.0);
    let spacing = multiple * SLIDER_MARK_SPACING;

    let mut values = vec![min];
    let mut next = (min / spacing).floor() * spacing + spacing;
    while next < max {
        values.push(next);
        next += spacing;
    }
    if max > min {
        values.push(max);
    }

    values
        .into_iter()
        .map(|value| SliderMark {
            value,
            label: format!("{:.0}", value),
        })
        .collect()
}
