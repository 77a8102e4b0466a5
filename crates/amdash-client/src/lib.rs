//! amdash-client: HTTP access to the AutoMonitor REST API.
//!
//! [`ApiClient`] issues plain `GET` requests against a base URL injected at
//! construction and decodes JSON bodies. The [`endpoints`] module layers the
//! typed calls the dashboard needs on top of it.
//!
//! Every call is a single best-effort attempt: no retry, no timeout, no
//! cancellation.

pub mod client;
pub mod endpoints;

pub use client::{ApiClient, ClientError};
