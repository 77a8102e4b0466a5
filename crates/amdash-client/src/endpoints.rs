//! Typed calls for the endpoints the dashboard consumes.

use crate::client::{ApiClient, ClientError};
use amdash_core::{normalizer::normalize_page, EventSummary, OverviewMetrics, Page};
use serde_json::Value;

pub const OVERVIEW_PATH: &str = "/metrics/overview";
pub const EVENTS_PATH: &str = "/events";
pub const HEALTH_PATH: &str = "/health";

/// Path for one page of events.
pub fn events_page_path(limit: u64, offset: u64) -> String {
    format!("{EVENTS_PATH}?limit={limit}&offset={offset}")
}

/// Path for a single event. `id` is inserted verbatim.
pub fn event_path(id: &str) -> String {
    format!("{EVENTS_PATH}/{id}")
}

impl ApiClient {
    /// `GET /metrics/overview`, decoded strictly.
    pub async fn overview_metrics(&self) -> Result<OverviewMetrics, ClientError> {
        self.get_json(OVERVIEW_PATH).await
    }

    /// `GET /events?limit=..&offset=..`, normalised into a [`Page`].
    pub async fn events_page(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Page<EventSummary>, ClientError> {
        let raw: Value = self.get_json(&events_page_path(limit, offset)).await?;
        Ok(normalize_page(&raw))
    }

    /// `GET /events/:id` as raw JSON; the caller decides what shape it accepts.
    pub async fn event(&self, id: &str) -> Result<Value, ClientError> {
        self.get_json(&event_path(id)).await
    }

    /// `GET /health`. `true` when the backend reports `{"status": "ok"}`.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let raw: Value = self.get_json(HEALTH_PATH).await?;
        Ok(raw.get("status").and_then(Value::as_str) == Some("ok"))
    }
}
