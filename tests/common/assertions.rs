//! Domain-specific assertion macros for amdash harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! record field or screen text that was wrong.

use ratatui::buffer::Buffer;

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert selected fields of an `EventSummary`.
///
/// ```rust
/// assert_event!(summary, id = 7, source = "https://example.com", added = 3);
/// ```
#[macro_export]
macro_rules! assert_event {
    ($event:expr, $($field:ident = $value:expr),+ $(,)?) => {{
        let event: &amdash_core::EventSummary = &$event;
        $(
            if event.$field != $value {
                panic!(
                    "assert_event! failed on `{}`:\n  expected: {:?}\n  actual:   {:?}\n  event: {:?}",
                    stringify!($field), $value, event.$field, event
                );
            }
        )+
    }};
}

/// Assert the envelope fields of a `Page` and its item count.
///
/// ```rust
/// assert_page!(page, len = 2, limit = 50, offset = 0, total = 120);
/// ```
#[macro_export]
macro_rules! assert_page {
    ($page:expr, len = $len:expr, limit = $limit:expr, offset = $offset:expr, total = $total:expr) => {{
        let page = &$page;
        pretty_assertions::assert_eq!(
            (page.items.len(), page.limit, page.offset, page.total),
            ($len, $limit, $offset, $total),
            "(len, limit, offset, total)"
        );
    }};
}

// ---------------------------------------------------------------------------
// Screen assertions
// ---------------------------------------------------------------------------

/// The buffer's text, one `String` per row with trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Assert that some row of the rendered buffer contains `needle`.
#[macro_export]
macro_rules! assert_screen_contains {
    ($buf:expr, $needle:expr) => {{
        let lines = $crate::common::buffer_lines(&$buf);
        let needle: &str = $needle;
        if !lines.iter().any(|l| l.contains(needle)) {
            panic!(
                "assert_screen_contains! failed: {:?} not on screen.\n{}",
                needle,
                lines.join("\n")
            );
        }
    }};
}

/// Assert that no row of the rendered buffer contains `needle`.
#[macro_export]
macro_rules! assert_screen_lacks {
    ($buf:expr, $needle:expr) => {{
        let lines = $crate::common::buffer_lines(&$buf);
        let needle: &str = $needle;
        if let Some(line) = lines.iter().find(|l| l.contains(needle)) {
            panic!(
                "assert_screen_lacks! failed: {:?} found in row {:?}",
                needle, line
            );
        }
    }};
}
