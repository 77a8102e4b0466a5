//! Test builders: ergonomic constructors for raw event payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// EventJson
// ---------------------------------------------------------------------------

/// Fluent builder for raw event JSON as the backend would send it.
///
/// # Example
///
/// ```rust
/// let raw = EventJson::new(7)
///     .source("https://example.com")
///     .counts(3, 1, 2)
///     .nested_under("diff")
///     .build();
/// ```
pub struct EventJson {
    fields: Map<String, Value>,
    counts: Option<(Value, Value, Value)>,
    nest: Option<String>,
}

impl EventJson {
    pub fn new(id: u64) -> Self {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!(id));
        Self {
            fields,
            counts: None,
            nest: None,
        }
    }

    pub fn source(self, source: impl Into<String>) -> Self {
        self.field("source", source.into())
    }

    pub fn created_at(self, ts: impl Into<String>) -> Self {
        self.field("created_at", ts.into())
    }

    pub fn counts(mut self, added: i64, removed: i64, updated: i64) -> Self {
        self.counts = Some((json!(added), json!(removed), json!(updated)));
        self
    }

    /// Counts as arrays of placeholder change records.
    pub fn count_lists(mut self, added: usize, removed: usize, updated: usize) -> Self {
        let list = |n: usize| Value::Array((0..n).map(|i| json!({ "line": i })).collect());
        self.counts = Some((list(added), list(removed), list(updated)));
        self
    }

    /// Put the counts under `key` (e.g. `"summary"`) instead of at the top.
    pub fn nested_under(mut self, key: impl Into<String>) -> Self {
        self.nest = Some(key.into());
        self
    }

    /// Arbitrary extra key, e.g. fields only the raw payload view shows.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> Value {
        let mut fields = self.fields;
        if let Some((added, removed, updated)) = self.counts {
            let counts = json!({ "added": added, "removed": removed, "updated": updated });
            match self.nest {
                Some(key) => {
                    fields.insert(key, counts);
                }
                None => {
                    if let Value::Object(map) = counts {
                        fields.extend(map);
                    }
                }
            }
        }
        Value::Object(fields)
    }
}

/// Wrap raw events in a page envelope.
pub fn page_json(items: Vec<Value>, limit: u64, offset: u64, total: u64) -> Value {
    json!({ "items": items, "limit": limit, "offset": offset, "total": total })
}
