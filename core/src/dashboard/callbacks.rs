// Reactive callback bindings
//
// Maps sets of input control ids to chart handlers. A control change reruns
// every handler listing that control as an input, synchronously and from the
// full dataset.

use crate::aggregate::{aggregate_outcomes, aggregate_scatter, ChartDescriptor, FilterSelection};
use crate::dashboard::layout::{PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};
use crate::dataset::Dataset;
use std::sync::Arc;
use tracing::{debug, info};

/// A chart output bound to a set of input controls
pub trait ChartCallback: Send + Sync {
    /// Id of the graph this callback replaces
    fn output(&self) -> &str;

    /// Ids of the controls that trigger this callback
    fn inputs(&self) -> &[&'static str];

    /// Recompute the chart from the current control values
    fn render(&self, dataset: &Dataset, selection: &FilterSelection) -> ChartDescriptor;
}

/// Pie of success/failure counts, driven by the site dropdown
pub struct SuccessPieCallback;

impl ChartCallback for SuccessPieCallback {
    fn output(&self) -> &str {
        PIE_CHART
    }

    fn inputs(&self) -> &[&'static str] {
        &[SITE_DROPDOWN]
    }

    fn render(&self, dataset: &Dataset, selection: &FilterSelection) -> ChartDescriptor {
        aggregate_outcomes(dataset, &selection.site).into()
    }
}

/// Payload vs. outcome scatter, driven by the site dropdown and payload slider
pub struct PayloadScatterCallback;

impl ChartCallback for PayloadScatterCallback {
    fn output(&self) -> &str {
        SCATTER_CHART
    }

    fn inputs(&self) -> &[&'static str] {
        &[SITE_DROPDOWN, PAYLOAD_SLIDER]
    }

    fn render(&self, dataset: &Dataset, selection: &FilterSelection) -> ChartDescriptor {
        aggregate_scatter(dataset, &selection.site, selection.payload_range).into()
    }
}

/// Ordered registry of chart callbacks
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Arc<dyn ChartCallback>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's two bindings: pie ← site, scatter ← site + payload
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SuccessPieCallback));
        registry.register(Arc::new(PayloadScatterCallback));
        registry
    }

    /// Register a callback, replacing any existing one for the same output
    pub fn register(&mut self, callback: Arc<dyn ChartCallback>) {
        info!(
            target: "dashboard",
            output = callback.output(),
            inputs = ?callback.inputs(),
            "Registering chart callback"
        );
        let existing = self
            .callbacks
            .iter()
            .position(|c| c.output() == callback.output());
        match existing {
            Some(idx) => self.callbacks[idx] = callback,
            None => self.callbacks.push(callback),
        }
    }

    pub fn get(&self, output: &str) -> Option<Arc<dyn ChartCallback>> {
        self.callbacks.iter().find(|c| c.output() == output).cloned()
    }

    pub fn outputs(&self) -> Vec<&str> {
        self.callbacks.iter().map(|c| c.output()).collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Callbacks listing any of the changed controls as an input
    pub fn triggered_by<S: AsRef<str>>(&self, changed: &[S]) -> Vec<Arc<dyn ChartCallback>> {
        self.callbacks
            .iter()
            .filter(|c| {
                c.inputs()
                    .iter()
                    .any(|input| changed.iter().any(|id| id.as_ref() == *input))
            })
            .cloned()
            .collect()
    }

    /// Rerun the callbacks triggered by `changed`, in registration order
    pub fn dispatch<S: AsRef<str>>(
        &self,
        dataset: &Dataset,
        changed: &[S],
        selection: &FilterSelection,
    ) -> Vec<(String, ChartDescriptor)> {
        let triggered = self.triggered_by(changed);
        debug!(
            target: "dashboard",
            changed = ?changed.iter().map(|s| s.as_ref()).collect::<Vec<_>>(),
            triggered = triggered.len(),
            "Dispatching control change"
        );

        triggered
            .into_iter()
            .map(|c| (c.output().to_string(), c.render(dataset, selection)))
            .collect()
    }

    /// Render every output, used for the initial page state
    pub fn render_all(
        &self,
        dataset: &Dataset,
        selection: &FilterSelection,
    ) -> Vec<(String, ChartDescriptor)> {
        self.callbacks
            .iter()
            .map(|c| (c.output().to_string(), c.render(dataset, selection)))
            .collect()
    }
}
