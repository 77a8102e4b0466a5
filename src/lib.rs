//! amdash: terminal dashboard for AutoMonitor change events.
//!
//! Read-only client for the AutoMonitor REST backend. This crate re-exports
//! the three layers so that integration tests and benches can import them
//! from one place.
//!
//! # Architecture
//!
//! ```text
//! amdash-client ──► amdash-core::normalizer ──► amdash-tui views
//!    (hyper)            (pure functions)          (ratatui)
//! ```
//!
//! The UI drives the main thread; fetches run as tasks on a tokio runtime
//! and report back over a channel.

pub use amdash_client::{endpoints, ApiClient, ClientError};
pub use amdash_core::{
    config, error, normalizer, EventDetail, EventSummary, OverviewMetrics, Page,
};
pub use amdash_tui as tui;
