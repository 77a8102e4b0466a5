//! Background fetches.
//!
//! The UI thread never awaits the network. A view asks for data by returning
//! a [`Ticket`]; the [`Fetcher`] runs it on the tokio runtime and sends a
//! [`Fetched`] back over an unbounded channel, which the event loop drains
//! between frames.
//!
//! Transport errors are caught here, logged, and turned into `None` payloads.
//! Views only ever see "data" or "no data".

use amdash_client::ApiClient;
use amdash_core::{EventSummary, OverviewMetrics, Page};
use serde_json::Value;
use tokio::{runtime::Handle, sync::mpsc};

/// What a view wants loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Metrics and the latest events, requested concurrently.
    Overview { latest_limit: u64 },
    Events { limit: u64, offset: u64 },
    /// A single event; `id` is already validated as numeric.
    Event { id: String },
    Health,
}

/// A request stamped with the generation of the view that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub request: FetchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Overview {
        metrics: Option<OverviewMetrics>,
        latest: Option<Page<EventSummary>>,
    },
    Events(Option<Page<EventSummary>>),
    Event(Option<Value>),
    Health(bool),
}

/// A finished fetch on its way back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub generation: u64,
    pub payload: Payload,
}

/// Spawns fetches on a runtime and reports results over a channel.
pub struct Fetcher {
    client: ApiClient,
    runtime: Handle,
    tx: mpsc::UnboundedSender<Fetched>,
}

impl Fetcher {
    pub fn new(client: ApiClient, runtime: Handle) -> (Self, mpsc::UnboundedReceiver<Fetched>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { client, runtime, tx }, rx)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn dispatch(&self, ticket: Ticket) {
        tracing::debug!(generation = ticket.generation, request = ?ticket.request, "dispatch");
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let payload = execute(&client, ticket.request).await;
            // The receiver is gone only when the app is shutting down.
            let _ = tx.send(Fetched {
                generation: ticket.generation,
                payload,
            });
        });
    }
}

/// Run one request to completion, logging and swallowing transport errors.
pub async fn execute(client: &ApiClient, request: FetchRequest) -> Payload {
    match request {
        FetchRequest::Overview { latest_limit } => {
            let (metrics, latest) = tokio::join!(
                client.overview_metrics(),
                client.events_page(latest_limit, 0)
            );
            Payload::Overview {
                metrics: metrics
                    .inspect_err(|e| tracing::warn!(error = %e, "failed to load overview metrics"))
                    .ok(),
                latest: latest
                    .inspect_err(|e| tracing::warn!(error = %e, "failed to load latest events"))
                    .ok(),
            }
        }
        FetchRequest::Events { limit, offset } => Payload::Events(
            client
                .events_page(limit, offset)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, limit, offset, "failed to load events"))
                .ok(),
        ),
        FetchRequest::Event { id } => Payload::Event(
            client
                .event(&id)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, %id, "failed to load event"))
                .ok(),
        ),
        FetchRequest::Health => Payload::Health(
            client
                .health()
                .await
                .inspect_err(|e| tracing::debug!(error = %e, "health probe failed"))
                .unwrap_or(false),
        ),
    }
}
