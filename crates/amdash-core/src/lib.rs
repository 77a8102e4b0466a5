//! amdash-core: AutoMonitor dashboard core library.
//!
//! This crate holds everything that does not touch the network or the
//! terminal: the strict record types, the normalizer that maps loosely-typed
//! backend JSON onto them, and the layered configuration.
//!
//! # Data flow
//!
//! ```text
//! Client (raw JSON) ──► Normalizer ──► EventSummary / Page ──► Views
//! ```
//!
//! The normalizer is pure and total: malformed input degrades to defaults
//! instead of producing an error.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use error::ConfigError;
pub use types::{EventDetail, EventSummary, OverviewMetrics, Page};
