//! Static payload corpora used across harnesses.
//!
//! Each corpus entry is a raw JSON string shaped the way some backend
//! revision has sent it. Parsing happens at test time so failures point at
//! the harness, not at a broken fixture.

use serde_json::{json, Value};

/// The canonical shape: flat keys, integer counts.
pub const EVENT_CANONICAL: &str = r#"{
    "id": 7,
    "source": "https://example.com/pricing",
    "created_at": "2024-05-01T12:00:00Z",
    "added": 3,
    "removed": 1,
    "updated": 2
}"#;

/// Every field under a secondary alias, counts nested under `summary`.
pub const EVENT_ALIASED: &str = r#"{
    "event_id": 8,
    "source_name": "pricing-page",
    "createdAt": "2024-05-02T08:30:00Z",
    "summary": { "added": 4, "removed": 0, "updated": 6 }
}"#;

/// Counts as arrays of change records; the count is the array length.
pub const EVENT_ARRAY_COUNTS: &str = r#"{
    "id": 9,
    "url": "https://example.com/blog",
    "timestamp": "2024-05-03T00:00:00Z",
    "diff": {
        "added": [{ "line": 1 }, { "line": 2 }],
        "removed": [{ "line": 9 }],
        "updated": []
    }
}"#;

/// Numeric strings and a string id.
pub const EVENT_STRINGY: &str = r#"{
    "id": "10",
    "endpoint": "/api/status",
    "created": "yesterday",
    "counts": { "added": "12", "removed": " 5 ", "updated": "n/a" }
}"#;

/// Nothing recognisable at all.
pub const EVENT_SPARSE: &str = r#"{ "hash": "deadbeef" }"#;

/// Every shape above, in order.
pub const CORPUS_EVENTS: &[&str] = &[
    EVENT_CANONICAL,
    EVENT_ALIASED,
    EVENT_ARRAY_COUNTS,
    EVENT_STRINGY,
    EVENT_SPARSE,
];

/// Page envelopes, one per supported `total` alias plus degenerate inputs.
pub const CORPUS_PAGES: &[&str] = &[
    r#"{ "items": [], "limit": 50, "offset": 0, "total": 0 }"#,
    r#"{ "items": [{ "id": 1 }], "limit": 10, "offset": 0, "count": 120 }"#,
    r#"{ "items": [{ "id": 1 }, { "id": 2 }], "total_count": 2 }"#,
    r#"{ "items": "not a list" }"#,
    r#"[]"#,
    r#"null"#,
];

/// Parse a fixture string, panicking with the fixture text on failure.
pub fn parse(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("bad fixture {raw}: {e}"))
}

/// A well-formed `/metrics/overview` body.
pub fn overview_metrics_json() -> Value {
    json!({
        "total_events": 120,
        "sum_added": 900,
        "sum_removed": 40,
        "sum_updated": 310
    })
}

/// `n` canonical events with ids `1..=n`, newest first.
pub fn sample_events(n: u64) -> Vec<Value> {
    (1..=n)
        .rev()
        .map(|id| {
            crate::common::EventJson::new(id)
                .source(format!("https://example.com/page/{}", id % 7))
                .created_at(format!("2024-05-{:02}T10:00:00Z", 1 + id % 28))
                .counts(id as i64 % 5, id as i64 % 3, id as i64 % 4)
                .build()
        })
        .collect()
}
