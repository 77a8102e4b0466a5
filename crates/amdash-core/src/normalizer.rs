//! Normalizer: maps loosely-typed backend JSON onto [`EventSummary`] and
//! [`Page`] values.
//!
//! The backend has shipped several spellings for the same field over time
//! (`id` / `event_id`, `summary.added` / `diff.added_count`, ...). Each
//! output field has an ordered alias table below; the first alias that is
//! present wins and its value is coerced with [`to_number`] or
//! [`to_string`].
//!
//! Every function here is pure and total. Nothing returns an error: an
//! absent or malformed field becomes `0` or `""`.

use crate::types::{EventSummary, Page};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Alias tables (priority order)
// ---------------------------------------------------------------------------

pub const ID_KEYS: &[&str] = &["id", "event_id"];

pub const SOURCE_KEYS: &[&str] = &[
    "source",
    "source_name",
    "sourceId",
    "url",
    "source_url",
    "endpoint",
];

pub const CREATED_AT_KEYS: &[&str] = &["created_at", "createdAt", "timestamp", "created", "at"];

pub const ADDED_PATHS: &[&str] = &[
    "added",
    "summary.added",
    "counts.added",
    "diff.added",
    "diff.added_count",
    "stats.added",
];

pub const REMOVED_PATHS: &[&str] = &[
    "removed",
    "summary.removed",
    "counts.removed",
    "diff.removed",
    "diff.removed_count",
    "stats.removed",
];

pub const UPDATED_PATHS: &[&str] = &[
    "updated",
    "summary.updated",
    "counts.updated",
    "diff.updated",
    "diff.updated_count",
    "stats.updated",
];

/// Envelope keys consulted for `total`, after `total` itself.
pub const TOTAL_KEYS: &[&str] = &["total", "count", "total_count"];

// ---------------------------------------------------------------------------
// Coercions
// ---------------------------------------------------------------------------

/// Coerce any JSON value to a number.
///
/// - arrays → their length
/// - finite numbers → themselves
/// - numeric strings → the parsed value (see [`parse_number`])
/// - everything else, including `None`, `null`, booleans and objects → `0`
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Array(items)) => items.len() as f64,
        Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => parse_number(s).filter(|f| f.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce any JSON value to a display string.
///
/// Strings pass through, `None`/`null` become `""`, and everything else is
/// rendered the way a generic string coercion would render it.
pub fn to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => coerce_display(other),
    }
}

fn coerce_display(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (_, Some(u)) => u.to_string(),
            _ => format_number(n.as_f64().unwrap_or(0.0)),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_display)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parse a string the way a lenient numeric coercion does.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Decimal,
/// exponent, and `0x`/`0o`/`0b` integer forms are accepted. Returns `None`
/// when the string is not a number at all; the result may be infinite.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return u128::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // Rust also accepts "inf" and "nan" spellings; only the literal
    // `Infinity` forms are numbers here.
    match s.trim_start_matches(['+', '-']) {
        "Infinity" => {
            return Some(if s.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            })
        }
        rest if rest.starts_with(|c: char| c.is_ascii_alphabetic()) => return None,
        _ => {}
    }

    s.parse::<f64>().ok().filter(|f| !f.is_nan())
}

/// Render a number without a trailing `.0` for integral values.
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent form
/// with an explicit sign on the exponent (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    let abs = n.abs();
    if n == 0.0 {
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

// ---------------------------------------------------------------------------
// Field lookup
// ---------------------------------------------------------------------------

/// Return the value of the first key in `keys` that is present in `obj`.
///
/// A key mapped to `null` counts as present.
pub fn pick<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

/// Like [`pick`], but every candidate is a dot-separated path into nested
/// objects. The first path whose every segment resolves wins.
///
/// Arrays are traversed by canonical decimal index (`"items.0"`).
pub fn pick_path<'a>(obj: &'a Map<String, Value>, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|p| resolve_path(obj, p))
}

fn resolve_path<'a>(obj: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut cur = obj.get(segments.next()?)?;
    for seg in segments {
        cur = match cur {
            Value::Object(map) => map.get(seg)?,
            Value::Array(items) => items.get(array_index(seg)?)?,
            _ => return None,
        };
    }
    Some(cur)
}

fn array_index(seg: &str) -> Option<usize> {
    let canonical = !seg.is_empty()
        && seg.bytes().all(|b| b.is_ascii_digit())
        && (seg == "0" || !seg.starts_with('0'));
    if canonical {
        seg.parse().ok()
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Build an [`EventSummary`] from an event-shaped JSON object.
pub fn normalize_event(raw: &Map<String, Value>) -> EventSummary {
    EventSummary {
        // `as` saturates: negative ids clamp to 0, fractions truncate.
        id: to_number(pick(raw, ID_KEYS)) as u64,
        source: to_string(pick(raw, SOURCE_KEYS)),
        created_at: to_string(pick(raw, CREATED_AT_KEYS)),
        added: to_number(pick_path(raw, ADDED_PATHS)) as i64,
        removed: to_number(pick_path(raw, REMOVED_PATHS)) as i64,
        updated: to_number(pick_path(raw, UPDATED_PATHS)) as i64,
    }
}

/// Build a [`Page`] from a page envelope.
///
/// Non-object input is treated as an empty envelope. Only object elements of
/// `items` are kept. `limit` falls back to the number of items, `offset` to
/// `0`, and `total` to the first numeric entry of [`TOTAL_KEYS`] and then to
/// the number of items. Only JSON numbers count as numeric here.
pub fn normalize_page(raw: &Value) -> Page<EventSummary> {
    let empty = Map::new();
    let rec = raw.as_object().unwrap_or(&empty);

    let items: Vec<EventSummary> = rec
        .get("items")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_object)
                .map(normalize_event)
                .collect()
        })
        .unwrap_or_default();

    let len = items.len() as u64;
    let limit = numeric_field(rec, "limit").unwrap_or(len);
    let offset = numeric_field(rec, "offset").unwrap_or(0);
    let total = TOTAL_KEYS
        .iter()
        .find_map(|k| numeric_field(rec, k))
        .unwrap_or(len);

    Page {
        items,
        limit,
        offset,
        total,
    }
}

fn numeric_field(rec: &Map<String, Value>, key: &str) -> Option<u64> {
    rec.get(key).and_then(Value::as_f64).map(|f| f as u64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("fixture is not an object: {other}"),
        }
    }

    #[rstest]
    #[case(json!([1, 2, 3]), 3.0)]
    #[case(json!([]), 0.0)]
    #[case(json!(42), 42.0)]
    #[case(json!(-1.5), -1.5)]
    #[case(json!("17"), 17.0)]
    #[case(json!("  2.5 "), 2.5)]
    #[case(json!(""), 0.0)]
    #[case(json!("0x1f"), 31.0)]
    #[case(json!("1e3"), 1000.0)]
    #[case(json!("abc"), 0.0)]
    #[case(json!("Infinity"), 0.0)]
    #[case(json!("nan"), 0.0)]
    #[case(json!(true), 0.0)]
    #[case(json!(null), 0.0)]
    #[case(json!({ "a": 1 }), 0.0)]
    fn to_number_cases(#[case] input: Value, #[case] expected: f64) {
        assert_eq!(to_number(Some(&input)), expected);
    }

    #[test]
    fn to_number_absent_is_zero() {
        assert_eq!(to_number(None), 0.0);
    }

    #[rstest]
    #[case(json!("hello"), "hello")]
    #[case(json!(null), "")]
    #[case(json!(7), "7")]
    #[case(json!(2.5), "2.5")]
    #[case(json!(false), "false")]
    #[case(json!([1, null, "x"]), "1,,x")]
    #[case(json!({ "k": "v" }), "[object Object]")]
    fn to_string_cases(#[case] input: Value, #[case] expected: &str) {
        assert_eq!(to_string(Some(&input)), expected);
    }

    #[test]
    fn to_string_absent_is_empty() {
        assert_eq!(to_string(None), "");
    }

    #[test]
    fn pick_respects_priority_and_null_presence() {
        let o = obj(json!({ "event_id": 9, "id": null }));
        assert_eq!(pick(&o, ID_KEYS), Some(&Value::Null));
        assert_eq!(pick(&o, &["missing"]), None);
    }

    #[test]
    fn pick_path_first_resolvable_wins() {
        let o = obj(json!({ "diff": { "added_count": 5 } }));
        assert_eq!(pick_path(&o, &["added", "diff.added_count"]), Some(&json!(5)));
    }

    #[test]
    fn pick_path_skips_non_object_intermediate() {
        let o = obj(json!({ "summary": 3, "stats": { "added": 4 } }));
        assert_eq!(pick_path(&o, &["summary.added", "stats.added"]), Some(&json!(4)));
        assert_eq!(pick_path(&o, &["summary.added"]), None);
    }

    #[test]
    fn pick_path_indexes_arrays() {
        let o = obj(json!({ "runs": [{ "added": 1 }, { "added": 2 }] }));
        assert_eq!(pick_path(&o, &["runs.1.added"]), Some(&json!(2)));
        assert_eq!(pick_path(&o, &["runs.01.added"]), None);
    }

    #[test]
    fn normalize_event_full_aliases() {
        let e = normalize_event(&obj(json!({
            "event_id": "12",
            "source_url": "https://shop.example/api",
            "createdAt": "2025-01-02T03:04:05",
            "counts": { "added": [1, 2], "removed": "3" },
            "stats": { "updated": 4 }
        })));
        assert_eq!(
            e,
            EventSummary {
                id: 12,
                source: "https://shop.example/api".to_string(),
                created_at: "2025-01-02T03:04:05".to_string(),
                added: 2,
                removed: 3,
                updated: 4,
            }
        );
    }

    #[test]
    fn normalize_event_defaults() {
        assert_eq!(normalize_event(&Map::new()), EventSummary::default());
    }

    #[test]
    fn normalize_event_negative_id_clamps() {
        let e = normalize_event(&obj(json!({ "id": -4, "added": 2.9 })));
        assert_eq!(e.id, 0);
        assert_eq!(e.added, 2);
    }

    #[test]
    fn normalize_page_empty_inputs() {
        let expected = Page::<EventSummary>::default();
        assert_eq!(normalize_page(&Value::Null), expected);
        assert_eq!(normalize_page(&json!({})), expected);
        assert_eq!(normalize_page(&json!("nope")), expected);
    }

    #[test]
    fn normalize_page_fallbacks() {
        let page = normalize_page(&json!({
            "items": [{ "event_id": 7, "summary": { "added": 3 } }],
            "total": 50
        }));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 7);
        assert_eq!(page.items[0].added, 3);
        assert_eq!((page.limit, page.offset, page.total), (1, 0, 50));
    }

    #[test]
    fn normalize_page_count_alias() {
        let page = normalize_page(&json!({ "count": 12 }));
        assert_eq!(page.total, 12);
        assert!(page.items.is_empty());
    }

    #[test]
    fn normalize_page_total_count_alias() {
        let page = normalize_page(&json!({ "items": [], "total_count": 3, "limit": 50, "offset": 0 }));
        assert_eq!((page.limit, page.total), (50, 3));
    }

    #[test]
    fn normalize_page_filters_non_objects_and_ignores_string_numbers() {
        let page = normalize_page(&json!({
            "items": [{ "id": 1 }, 5, null, "x", [1], { "id": 2 }],
            "limit": "10",
            "offset": 20
        }));
        let ids: Vec<u64> = page.items.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!((page.limit, page.offset, page.total), (2, 20, 2));
    }

    #[test]
    fn format_number_integral() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(7.5), "7.5");
    }

    #[rstest]
    #[case(1e21, "1e+21")]
    #[case(-2.5e22, "-2.5e+22")]
    #[case(1e-7, "1e-7")]
    #[case(1.5e-7, "1.5e-7")]
    #[case(999_999_999_999_999_900_000.0, "999999999999999900000")]
    #[case(0.000001, "0.000001")]
    fn format_number_exponent_thresholds(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(format_number(n), expected);
    }

    #[test]
    fn to_string_renders_extreme_floats_in_exponent_form() {
        assert_eq!(to_string(Some(&json!(1e21))), "1e+21");
        assert_eq!(to_string(Some(&json!(1e-7))), "1e-7");
    }

    #[test]
    fn parse_number_forms() {
        assert_eq!(parse_number("+5"), Some(5.0));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("0b101"), Some(5.0));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn integers_round_trip_through_text(n in -(1i64 << 53)..(1i64 << 53)) {
                prop_assert_eq!(parse_number(&n.to_string()), Some(n as f64));
                prop_assert_eq!(format_number(n as f64), n.to_string());
            }

            #[test]
            fn array_counts_are_lengths(len in 0usize..64) {
                let o = obj(json!({ "added": vec![0; len] }));
                prop_assert_eq!(normalize_event(&o).added, len as i64);
            }
        }
    }
}
