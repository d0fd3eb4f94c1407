// Payload vs. outcome scatter
//
// Colours are assigned per filter result: booster categories take palette
// slots in the order they first appear among the filtered rows, so the same
// category can change colour between selections.

use super::{PayloadRange, SiteFilter};
use crate::dataset::{Dataset, LaunchRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Plotly's default colour cycle, indexed by first-seen category order
pub const PALETTE: [&str; 10] = [
    "rgb(31, 119, 180)",
    "rgb(255, 127, 14)",
    "rgb(44, 160, 44)",
    "rgb(214, 39, 40)",
    "rgb(148, 103, 189)",
    "rgb(140, 86, 75)",
    "rgb(227, 119, 194)",
    "rgb(127, 127, 127)",
    "rgb(188, 189, 34)",
    "rgb(23, 190, 207)",
];

pub const X_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const Y_AXIS_TITLE: &str = "Success";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Booster version category, also the hover label
    pub category: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub category: String,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: u32,
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 10,
            opacity: 0.7,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    /// Category colours in first-seen order
    pub colors: Vec<CategoryColor>,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub marker: MarkerStyle,
}

impl ScatterChart {
    pub fn color_of(&self, category: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.color.as_str())
    }

    pub fn to_figure(&self) -> serde_json::Value {
        let x: Vec<f64> = self.points.iter().map(|p| p.payload_mass_kg).collect();
        let y: Vec<u8> = self.points.iter().map(|p| p.class).collect();
        let colors: Vec<&str> = self.points.iter().map(|p| p.color.as_str()).collect();
        let text: Vec<&str> = self.points.iter().map(|p| p.category.as_str()).collect();

        json!({
            "data": [{
                "type": "scatter",
                "mode": "markers",
                "x": x,
                "y": y,
                "marker": {
                    "color": colors,
                    "size": self.marker.size,
                    "opacity": self.marker.opacity,
                },
                "text": text,
                "hoverinfo": "text",
                "name": "",
            }],
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_axis_title } },
                "yaxis": { "title": { "text": self.y_axis_title } },
            },
        })
    }
}

/// Give each distinct category a palette colour in first-seen order
pub fn assign_colors<'a, I>(categories: I) -> Vec<CategoryColor>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assigned: Vec<CategoryColor> = Vec::new();
    for category in categories {
        if assigned.iter().any(|c| c.category == category) {
            continue;
        }
        let color = PALETTE[assigned.len() % PALETTE.len()];
        assigned.push(CategoryColor {
            category: category.to_string(),
            color: color.to_string(),
        });
    }
    assigned
}

/// Launches within the payload range (inclusive), optionally for one site,
/// as coloured scatter points.
///
/// Reversed, NaN or out-of-data ranges produce an empty chart.
pub fn aggregate_scatter(
    dataset: &Dataset,
    site: &SiteFilter,
    payload_range: PayloadRange,
) -> ScatterChart {
    let rows: Vec<&LaunchRecord> = dataset
        .records()
        .iter()
        .filter(|r| payload_range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .collect();

    let colors = assign_colors(rows.iter().map(|r| r.booster_version_category.as_str()));

    let points = rows
        .iter()
        .map(|r| {
            let color = colors
                .iter()
                .find(|c| c.category == r.booster_version_category)
                .map(|c| c.color.clone())
                .unwrap_or_default();
            ScatterPoint {
                payload_mass_kg: r.payload_mass_kg,
                class: r.class,
                category: r.booster_version_category.clone(),
                color,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        target: "aggregate",
        site = %site,
        low = payload_range.low,
        high = payload_range.high,
        points = points.len(),
        categories = colors.len(),
        "Aggregated payload scatter"
    );

    ScatterChart {
        points,
        colors,
        title: format!("Success Payload Scatter Plot for {}", site),
        x_axis_title: X_AXIS_TITLE.to_string(),
        y_axis_title: Y_AXIS_TITLE.to_string(),
        marker: MarkerStyle::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_after_ten_categories() {
        let names: Vec<String> = (0..12).map(|i| format!("cat{}", i)).collect();
        let colors = assign_colors(names.iter().map(String::as_str));

        assert_eq!(colors.len(), 12);
        assert_eq!(colors[10].color, PALETTE[0]);
        assert_eq!(colors[11].color, PALETTE[1]);
    }

    #[test]
    fn repeated_categories_keep_first_slot() {
        let colors = assign_colors(["FT", "v1.1", "FT", "B4", "v1.1"]);
        let order: Vec<&str> = colors.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["FT", "v1.1", "B4"]);
        assert_eq!(colors[2].color, PALETTE[2]);
    }
}
