// Dashboard HTTP API server
//
// Serves the page, the control layout and the chart callbacks

use crate::aggregate::{ChartDescriptor, FilterSelection, PayloadRange, SiteFilter};
use crate::dashboard::callbacks::CallbackRegistry;
use crate::dashboard::layout::DashboardLayout;
use crate::dashboard::DashboardConfig;
use crate::dataset::Dataset;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};

/// Dashboard server state
#[derive(Clone)]
struct DashboardState {
    dataset: Arc<Dataset>,
    callbacks: CallbackRegistry,
    layout: Arc<DashboardLayout>,
}

/// Dashboard HTTP server
pub struct DashboardServer {
    config: DashboardConfig,
    dataset: Arc<Dataset>,
    callbacks: CallbackRegistry,
}

impl DashboardServer {
    pub fn new(config: DashboardConfig, dataset: Arc<Dataset>) -> Self {
        Self {
            config,
            dataset,
            callbacks: CallbackRegistry::standard(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: CallbackRegistry) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Build the axum router for this dashboard
    pub fn router(&self) -> Router {
        let state = DashboardState {
            dataset: self.dataset.clone(),
            callbacks: self.callbacks.clone(),
            layout: Arc::new(DashboardLayout::for_dataset(
                &self.dataset,
                self.config.title.clone(),
            )),
        };

        Router::new()
            .route("/", get(index_handler))
            .route("/static/*asset", get(static_asset_handler))
            .route("/api/health", get(health_handler))
            .route("/api/layout", get(layout_handler))
            .route("/api/charts/:output_id", get(chart_handler))
            .route("/api/callback", post(callback_handler))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state)
    }

    /// Start the Dashboard server
    pub async fn serve(self) -> crate::Result<()> {
        let addr = self.config.addr();
        info!(
            target: "dashboard",
            addr = %addr,
            "Starting Dashboard server"
        );

        let listener = TcpListener::bind(&addr).await?;
        self.serve_with_listener(listener).await
    }

    /// Serve on an already bound listener
    pub async fn serve_with_listener(self, listener: TcpListener) -> crate::Result<()> {
        let app = self.router();
        let local = listener.local_addr()?;
        info!(
            target: "dashboard",
            url = %format!("http://{}", local),
            records = self.dataset.len(),
            "Dashboard server ready"
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Serve the main HTML page
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html><html><head><meta charset="utf-8"><title>Launch Records Dashboard</title></head><body><h1>Dashboard assets not found</h1></body></html>"#;

async fn index_handler() -> Html<&'static str> {
    let html = crate::dashboard::static_assets::get_text("index.html").unwrap_or(FALLBACK_INDEX);
    Html(html)
}

async fn static_asset_handler(Path(asset): Path<String>) -> impl IntoResponse {
    match crate::dashboard::static_assets::get(asset.as_str()) {
        Some(asset) => {
            let mut headers = HeaderMap::new();
            if let Ok(value) = header::HeaderValue::from_str(asset.content_type) {
                headers.insert(header::CONTENT_TYPE, value);
            }
            (StatusCode::OK, headers, asset.body).into_response()
        }
        None => {
            let headers = HeaderMap::new();
            (StatusCode::NOT_FOUND, headers, b"Not found".as_slice()).into_response()
        }
    }
}

async fn health_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "records": state.dataset.len(),
    }))
}

/// Get the static control layout
async fn layout_handler(State(state): State<DashboardState>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

/// Query parameters for a single chart: ?site=ALL&low=0&high=10000
#[derive(Debug, Default, Deserialize)]
struct ChartQuery {
    site: Option<String>,
    low: Option<f64>,
    high: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChartResponse {
    output: String,
    descriptor: ChartDescriptor,
    figure: serde_json::Value,
}

/// Render one chart output from query parameters
async fn chart_handler(
    State(state): State<DashboardState>,
    Path(output_id): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartResponse>, StatusCode> {
    let Some(callback) = state.callbacks.get(&output_id) else {
        warn!(target: "dashboard", output = %output_id, "Unknown chart output");
        return Err(StatusCode::NOT_FOUND);
    };

    let full = PayloadRange::full(&state.dataset);
    let selection = FilterSelection::new(
        query.site.map(SiteFilter::from).unwrap_or_default(),
        PayloadRange::new(
            query.low.unwrap_or(full.low),
            query.high.unwrap_or(full.high),
        ),
    );

    let descriptor = callback.render(&state.dataset, &selection);
    let figure = descriptor.to_figure();
    Ok(Json(ChartResponse {
        output: output_id,
        descriptor,
        figure,
    }))
}

/// Control values posted by the page; missing values fall back to the initial state
#[derive(Debug, Default, Deserialize)]
struct CallbackInputs {
    site: Option<SiteFilter>,
    payload_range: Option<PayloadRange>,
}

#[derive(Debug, Deserialize)]
struct CallbackRequest {
    /// Ids of the controls whose value changed
    changed: Vec<String>,
    #[serde(default)]
    inputs: CallbackInputs,
}

#[derive(Debug, Serialize)]
struct CallbackResponse {
    /// Output id → Plotly figure
    outputs: BTreeMap<String, serde_json::Value>,
}

/// Rerun the callbacks bound to the changed controls
async fn callback_handler(
    State(state): State<DashboardState>,
    Json(request): Json<CallbackRequest>,
) -> Json<CallbackResponse> {
    let initial = FilterSelection::initial(&state.dataset);
    let selection = FilterSelection {
        site: request.inputs.site.unwrap_or(initial.site),
        payload_range: request
            .inputs
            .payload_range
            .unwrap_or(initial.payload_range),
    };

    let outputs = state
        .callbacks
        .dispatch(&state.dataset, &request.changed, &selection)
        .into_iter()
        .map(|(output, descriptor)| (output, descriptor.to_figure()))
        .collect::<BTreeMap<_, _>>();

    debug!(
        target: "dashboard",
        site = %selection.site,
        outputs = outputs.len(),
        "Callback complete"
    );

    Json(CallbackResponse { outputs })
}
