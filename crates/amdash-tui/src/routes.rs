//! Static route table.
//!
//! | Path          | Screen        |
//! |---------------|---------------|
//! | `/`           | Overview      |
//! | `/events`     | Events list   |
//! | `/events/:id` | Event detail  |
//! | `/runs/:id`   | Run detail    |
//!
//! The only dynamic part is extracting `id`; it is kept as the raw path
//! segment and validated by the screen that consumes it.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Events,
    EventDetail(String),
    RunDetail(String),
}

impl Route {
    /// Parse a path. A trailing `/` is ignored; unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        let segments: Vec<&str> = trimmed.strip_prefix('/')?.split('/').collect();

        match segments.as_slice() {
            [""] => Some(Route::Overview),
            ["events"] => Some(Route::Events),
            ["events", id] if !id.is_empty() => Some(Route::EventDetail((*id).to_string())),
            ["runs", id] if !id.is_empty() => Some(Route::RunDetail((*id).to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetail(id) => format!("/events/{id}"),
            Route::RunDetail(id) => format!("/runs/{id}"),
        }
    }

    /// Which top-level nav entry is highlighted while this route is active.
    pub fn section(&self) -> Section {
        match self {
            Route::Overview | Route::RunDetail(_) => Section::Dashboard,
            Route::Events | Route::EventDetail(_) => Section::Events,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Top-level navigation entries shown in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Events,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Dashboard, Section::Events];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Events => "Events",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
