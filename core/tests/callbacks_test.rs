//! Callback Registry Tests
//!
//! - Standard bindings: pie ← site, scatter ← site + payload
//! - Dispatch only reruns callbacks bound to the changed controls
//! - Layout exposes the controls the callbacks listen to

use launch_dash_core::aggregate::{
    ChartDescriptor, FilterSelection, PayloadRange, SiteFilter, ALL_SITES,
};
use launch_dash_core::dashboard::{
    CallbackRegistry, ChartCallback, Component, DashboardLayout, PAYLOAD_SLIDER, PIE_CHART,
    SCATTER_CHART, SITE_DROPDOWN,
};
use launch_dash_core::dataset::{Dataset, LaunchRecord};
use std::sync::Arc;

fn dataset() -> Dataset {
    Dataset::from_records(vec![
        LaunchRecord::new("A", 100.0, 1, "FT"),
        LaunchRecord::new("A", 600.0, 0, "v1.1"),
        LaunchRecord::new("B", 300.0, 1, "B4"),
    ])
    .unwrap()
}

fn outputs(results: &[(String, ChartDescriptor)]) -> Vec<&str> {
    results.iter().map(|(id, _)| id.as_str()).collect()
}

#[test]
fn standard_registry_binds_both_charts() {
    let registry = CallbackRegistry::standard();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.outputs(), vec![PIE_CHART, SCATTER_CHART]);

    let pie = registry.get(PIE_CHART).expect("pie callback");
    assert_eq!(pie.inputs(), &[SITE_DROPDOWN]);

    let scatter = registry.get(SCATTER_CHART).expect("scatter callback");
    assert_eq!(scatter.inputs(), &[SITE_DROPDOWN, PAYLOAD_SLIDER]);
}

#[test]
fn site_change_reruns_both_charts() {
    let ds = dataset();
    let selection = FilterSelection::new("A", PayloadRange::full(&ds));
    let results = CallbackRegistry::standard().dispatch(&ds, &[SITE_DROPDOWN], &selection);

    assert_eq!(outputs(&results), vec![PIE_CHART, SCATTER_CHART]);
    match &results[0].1 {
        ChartDescriptor::Pie(pie) => assert_eq!(pie.values, vec![1, 1]),
        other => panic!("expected pie, got {other:?}"),
    }
    match &results[1].1 {
        ChartDescriptor::Scatter(scatter) => assert_eq!(scatter.points.len(), 2),
        other => panic!("expected scatter, got {other:?}"),
    }
}

#[test]
fn payload_change_reruns_only_scatter() {
    let ds = dataset();
    let selection = FilterSelection::new(ALL_SITES, PayloadRange::new(0.0, 500.0));
    let results = CallbackRegistry::standard().dispatch(&ds, &[PAYLOAD_SLIDER], &selection);

    assert_eq!(outputs(&results), vec![SCATTER_CHART]);
    assert_eq!(
        results[0].1.title(),
        "Success Payload Scatter Plot for ALL"
    );
}

#[test]
fn unrelated_change_triggers_nothing() {
    let ds = dataset();
    let selection = FilterSelection::initial(&ds);
    let results = CallbackRegistry::standard().dispatch(&ds, &["some-other-control"], &selection);
    assert!(results.is_empty());
}

#[test]
fn render_all_covers_every_output() {
    let ds = dataset();
    let results = CallbackRegistry::standard().render_all(&ds, &FilterSelection::initial(&ds));
    assert_eq!(outputs(&results), vec![PIE_CHART, SCATTER_CHART]);
}

struct PayloadDrivenPie;

impl ChartCallback for PayloadDrivenPie {
    fn output(&self) -> &str {
        PIE_CHART
    }

    fn inputs(&self) -> &[&'static str] {
        &[PAYLOAD_SLIDER]
    }

    fn render(&self, dataset: &Dataset, selection: &FilterSelection) -> ChartDescriptor {
        launch_dash_core::aggregate_outcomes(dataset, &selection.site).into()
    }
}

#[test]
fn registering_same_output_replaces_binding() {
    let mut registry = CallbackRegistry::standard();
    registry.register(Arc::new(PayloadDrivenPie));

    assert_eq!(registry.len(), 2);
    let triggered: Vec<String> = registry
        .triggered_by(&[PAYLOAD_SLIDER])
        .iter()
        .map(|c| c.output().to_string())
        .collect();
    assert_eq!(triggered, vec![PIE_CHART, SCATTER_CHART]);
    assert!(registry
        .triggered_by(&[SITE_DROPDOWN])
        .iter()
        .all(|c| c.output() == SCATTER_CHART));
}

#[test]
fn layout_lists_sites_and_payload_bounds() {
    let ds = dataset();
    let layout = DashboardLayout::for_dataset(&ds, "Launches");

    match layout.component(SITE_DROPDOWN) {
        Some(Component::Dropdown { options, value, .. }) => {
            let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(values, vec!["ALL", "A", "B"]);
            assert_eq!(options[0].label, "All Sites");
            assert_eq!(value, ALL_SITES);
        }
        other => panic!("expected dropdown, got {other:?}"),
    }

    match layout.component(PAYLOAD_SLIDER) {
        Some(Component::RangeSlider {
            min,
            max,
            step,
            value,
            ..
        }) => {
            // 500 kg span is off the 1000 kg grid, so the slider is continuous
            assert_eq!(*step, None);
            assert_eq!(*min, 100.0);
            assert_eq!(*max, 600.0);
            assert_eq!(*value, PayloadRange::new(100.0, 600.0));
        }
        other => panic!("expected range slider, got {other:?}"),
    }

    assert!(layout.component(PIE_CHART).is_some());
    assert!(layout.component(SCATTER_CHART).is_some());
    assert_eq!(
        layout.components.first(),
        Some(&Component::Heading {
            text: "Launches".into()
        })
    );
}

#[test]
fn initial_selection_is_all_sites_full_range() {
    let ds = dataset();
    let selection = FilterSelection::initial(&ds);
    assert_eq!(selection.site, SiteFilter::All);
    assert_eq!(selection.payload_range, PayloadRange::new(100.0, 600.0));
}

#[test]
fn slider_step_always_reaches_both_bounds() {
    for (low, high) in [(0.0, 9600.0), (0.0, 9000.0), (500.0, 2500.0), (0.0, 2.5e9)] {
        let ds = Dataset::from_records(vec![
            LaunchRecord::new("A", low, 1, "FT"),
            LaunchRecord::new("A", high, 0, "FT"),
        ])
        .unwrap();
        let layout = DashboardLayout::for_dataset(&ds, "Launches");

        match layout.component(PAYLOAD_SLIDER) {
            Some(Component::RangeSlider {
                min, max, step, marks, ..
            }) => {
                if let Some(step) = step {
                    assert_eq!((max - min) % step, 0.0, "range {low}..{high}");
                }
                assert!(marks.len() <= 12, "range {low}..{high}: {} marks", marks.len());
            }
            other => panic!("expected range slider, got {other:?}"),
        }
    }
}
