//! Fake AutoMonitor backend for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /metrics/overview`: the configured metrics object
//! - `GET /events?limit=&offset=`: a slice of the configured events wrapped
//!   in a page envelope
//! - `GET /events/{id}`: one configured event, or 404
//! - `GET /health`: `{"status": "ok"}`
//!
//! Any path can be forced to answer with a fixed status and body via
//! [`FakeBackend::respond`], which is how error and decode paths are tested.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn demo() {
//! use common::fake_backend::FakeBackend;
//!
//! let backend = FakeBackend::start().await.unwrap();
//! backend.set_events(common::sample_events(3)).await;
//! let client = amdash_client::ApiClient::new(backend.base_url());
//! # }
//! ```

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct BackendState {
    metrics: Option<Value>,
    events: Vec<Value>,
    /// Envelope key used for the total; `None` omits it entirely.
    total_key: Option<&'static str>,
    /// Forced `(status, body)` responses keyed by request path.
    overrides: HashMap<String, (u16, String)>,
    /// Every request URI seen, in order.
    requests: Vec<String>,
}

type Shared = Arc<Mutex<BackendState>>;

/// Handle to the running fake backend.
pub struct FakeBackend {
    addr: SocketAddr,
    state: Shared,
}

impl FakeBackend {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::new(Mutex::new(BackendState {
            total_key: Some("total"),
            ..Default::default()
        }));

        let app = Router::new()
            .route("/metrics/overview", get(overview))
            .route("/events", get(list_events))
            .route("/events/{id}", get(get_event))
            .route("/health", get(health))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_metrics(&self, metrics: Value) {
        self.state.lock().await.metrics = Some(metrics);
    }

    pub async fn set_events(&self, events: Vec<Value>) {
        self.state.lock().await.events = events;
    }

    /// Report the total under `key` (`"total"`, `"count"`, …) or not at all.
    pub async fn set_total_key(&self, key: Option<&'static str>) {
        self.state.lock().await.total_key = key;
    }

    /// Force `path` to answer with `status` and a raw `body`.
    pub async fn respond(&self, path: &str, status: u16, body: &str) {
        self.state
            .lock()
            .await
            .overrides
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Request URIs received so far (path and query).
    pub async fn requests(&self) -> Vec<String> {
        self.state.lock().await.requests.clone()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Record the request and return the forced response for its path, if any.
async fn intercept(state: &Shared, uri: &Uri) -> Option<Response> {
    let mut s = state.lock().await;
    s.requests.push(uri.to_string());
    let (status, body) = s.overrides.get(uri.path())?.clone();
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Some((status, body).into_response())
}

async fn overview(State(state): State<Shared>, uri: Uri) -> Response {
    if let Some(forced) = intercept(&state, &uri).await {
        return forced;
    }
    match state.lock().await.metrics.clone() {
        Some(metrics) => Json(metrics).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[derive(Deserialize)]
struct PageQuery {
    limit: Option<usize>,
    offset: Option<usize>,
}

async fn list_events(
    State(state): State<Shared>,
    uri: Uri,
    Query(q): Query<PageQuery>,
) -> Response {
    if let Some(forced) = intercept(&state, &uri).await {
        return forced;
    }
    let s = state.lock().await;
    let limit = q.limit.unwrap_or(50);
    let offset = q.offset.unwrap_or(0);
    let items: Vec<Value> = s.events.iter().skip(offset).take(limit).cloned().collect();

    let mut envelope = json!({ "items": items, "limit": limit, "offset": offset });
    if let Some(key) = s.total_key {
        envelope[key] = json!(s.events.len());
    }
    Json(envelope).into_response()
}

async fn get_event(State(state): State<Shared>, uri: Uri, Path(id): Path<String>) -> Response {
    if let Some(forced) = intercept(&state, &uri).await {
        return forced;
    }
    let s = state.lock().await;
    let found = s
        .events
        .iter()
        .find(|e| e.get("id").map(|v| v.to_string()) == Some(id.clone()));
    match found {
        Some(event) => Json(event.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response(),
    }
}

async fn health(State(state): State<Shared>, uri: Uri) -> Response {
    if let Some(forced) = intercept(&state, &uri).await {
        return forced;
    }
    Json(json!({ "status": "ok" })).into_response()
}
