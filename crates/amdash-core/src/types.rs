//! Core record types for amdash-core.
//!
//! These are the strict shapes the rest of the application works with. They
//! are built fresh from every fetch and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One detected change event, normalised from whatever shape the backend sent.
///
/// Every field has a safe default: absent or unparsable counts are `0`,
/// absent strings are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: u64,
    /// Where the change was detected (name, id or URL, whichever was sent).
    pub source: String,
    /// Creation timestamp exactly as the backend formatted it.
    pub created_at: String,
    pub added: i64,
    pub removed: i64,
    pub updated: i64,
}

/// One page of a paginated collection.
///
/// `items.len() <= limit` and `total >= items.len()` are expected from a
/// well-behaved backend but neither is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub limit: u64,
    pub offset: u64,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            limit: 0,
            offset: 0,
            total: 0,
        }
    }
}

impl<T> Page<T> {
    /// Whether the backend reports more items than this page carries.
    pub fn is_partial(&self) -> bool {
        self.total > self.items.len() as u64
    }
}

/// Aggregate counters for the overview screen.
///
/// Passed through from `/metrics/overview` without normalization: the four
/// field names must match exactly or decoding fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_events: i64,
    pub sum_added: i64,
    pub sum_removed: i64,
    pub sum_updated: i64,
}

/// A single event as shown on the detail screen: the normalised summary plus
/// the untouched JSON object it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub summary: EventSummary,
    pub raw: Map<String, Value>,
}

impl EventDetail {
    /// Build a detail record from a fetched payload.
    ///
    /// Returns `None` when the payload is not a JSON object, which the detail
    /// screen treats as "not found".
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(raw) => Some(Self {
                summary: crate::normalizer::normalize_event(&raw),
                raw,
            }),
            _ => None,
        }
    }

    /// The raw payload pretty-printed with two-space indentation.
    pub fn pretty_raw(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
