//! Screens. Each one is a small request/render state machine:
//!
//! ```text
//! Loading ──► Ready(data)
//!    └──────► Failed
//! ```
//!
//! A screen leaves `Loading` exactly once per navigation or parameter
//! change. Nothing is retried automatically; `r` re-enters `Loading` on
//! demand.

pub mod detail;
pub mod events;
pub mod overview;
pub mod run;

use crate::{
    event::AppEvent,
    fetch::{FetchRequest, Payload},
    routes::Route,
    theme::Theme,
};
use amdash_core::config::UiConfig;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

pub use detail::{DetailState, DetailView};
pub use events::{EventsState, EventsView};
pub use overview::{OverviewState, OverviewView};
pub use run::{RunState, RunView};

/// Fetch lifecycle of a screen's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Load<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(v) => Some(v),
            _ => None,
        }
    }
}

/// What a screen asks the shell to do after handling a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Open(Route),
    Fetch(FetchRequest),
}

/// The active screen.
#[derive(Debug)]
pub enum View {
    Overview(OverviewState),
    Events(EventsState),
    EventDetail(DetailState),
    RunDetail(RunState),
}

impl View {
    /// Build the screen for `route` in its initial state, plus the fetch it
    /// needs (if any).
    pub fn for_route(route: &Route, ui: &UiConfig) -> (View, Option<FetchRequest>) {
        let view = match route {
            Route::Overview => View::Overview(OverviewState::new(ui.latest_limit)),
            Route::Events => View::Events(EventsState::new(ui.page_size)),
            Route::EventDetail(id) => View::EventDetail(DetailState::new(id)),
            Route::RunDetail(id) => View::RunDetail(RunState::new(id)),
        };
        let request = view.request();
        (view, request)
    }

    /// The fetch for the screen's current parameters.
    pub fn request(&self) -> Option<FetchRequest> {
        match self {
            View::Overview(s) => Some(s.request()),
            View::Events(s) => Some(s.request()),
            View::EventDetail(s) => s.request(),
            View::RunDetail(_) => None,
        }
    }

    /// Re-enter `Loading` and return the fetch to issue. Screens without a
    /// fetch are left untouched.
    pub fn reload(&mut self) -> Option<FetchRequest> {
        let request = self.request()?;
        match self {
            View::Overview(s) => s.state = Load::Loading,
            View::Events(s) => s.state = Load::Loading,
            View::EventDetail(s) => s.reset(),
            View::RunDetail(_) => {}
        }
        Some(request)
    }

    pub fn handle(&mut self, event: &AppEvent) -> Option<ViewAction> {
        match self {
            View::Overview(s) => s.handle(event),
            View::Events(s) => s.handle(event),
            View::EventDetail(s) => {
                s.handle(event);
                None
            }
            View::RunDetail(_) => None,
        }
    }

    /// Apply a finished fetch. Payloads for a different screen kind are
    /// ignored.
    pub fn apply(&mut self, payload: Payload) {
        match (self, payload) {
            (View::Overview(s), Payload::Overview { metrics, latest }) => s.apply(metrics, latest),
            (View::Events(s), Payload::Events(page)) => s.apply(page),
            (View::EventDetail(s), Payload::Event(value)) => s.apply(value),
            (view, payload) => {
                tracing::debug!(view = view.name(), ?payload, "payload does not match view");
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Overview(_) => "overview",
            View::Events(_) => "events",
            View::EventDetail(_) => "event_detail",
            View::RunDetail(_) => "run_detail",
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            View::Overview(s) => s.state.is_loading(),
            View::Events(s) => s.state.is_loading(),
            View::EventDetail(s) => s.state.is_loading(),
            View::RunDetail(_) => false,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        match self {
            View::Overview(s) => OverviewView::new(s, theme).render(area, buf),
            View::Events(s) => EventsView::new(s, theme).render(area, buf),
            View::EventDetail(s) => DetailView::new(s, theme).render(area, buf),
            View::RunDetail(s) => RunView::new(s, theme).render(area, buf),
        }
    }
}

/// Move a row selection by one, clamped to `0..len`.
pub(crate) fn step_selection(selected: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}

/// Render a single message centred vertically in `area`.
pub(crate) fn render_message(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
    let y_pad = area.height.saturating_sub(1) / 2;
    let row = Rect {
        y: area.y + y_pad,
        height: area.height.min(1),
        ..area
    };
    Paragraph::new(Line::styled(text.to_string(), style))
        .alignment(Alignment::Center)
        .render(row, buf);
}
