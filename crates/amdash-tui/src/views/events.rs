//! Events list (`/events`): one page of events with previous/next paging.
//!
//! `limit` is fixed for the lifetime of the screen; `offset` moves by
//! `limit`. Paging re-enters `Loading` and issues a new fetch. "Previous" is
//! disabled at offset 0; "next" is disabled once `offset + limit >= total`.

use super::{render_message, step_selection, Load, ViewAction};
use crate::{
    event::{AppEvent, Direction},
    fetch::FetchRequest,
    routes::Route,
    theme::Theme,
    widgets::event_table::EventTable,
};
use amdash_core::{EventSummary, Page};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// Whether "previous" is enabled at `offset`.
pub fn can_prev(offset: u64) -> bool {
    offset > 0
}

/// Whether "next" is enabled at `offset` for a fixed `limit`.
pub fn can_next(offset: u64, limit: u64, total: u64) -> bool {
    offset.saturating_add(limit) < total
}

/// The 1-based `(start, end)` row range shown in the "Viewing" header.
pub fn viewing_range(offset: u64, shown: usize, total: u64) -> (u64, u64) {
    let start = if total == 0 { 0 } else { offset + 1 };
    let end = offset.saturating_add(shown as u64).min(total);
    (start, end)
}

#[derive(Debug)]
pub struct EventsState {
    pub limit: u64,
    pub offset: u64,
    pub state: Load<Page<EventSummary>>,
    pub selected: usize,
}

impl EventsState {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            offset: 0,
            state: Load::Loading,
            selected: 0,
        }
    }

    pub fn request(&self) -> FetchRequest {
        FetchRequest::Events {
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn apply(&mut self, page: Option<Page<EventSummary>>) {
        self.selected = 0;
        self.state = match page {
            Some(page) => Load::Ready(page),
            None => Load::Failed,
        };
    }

    /// "Previous" is only offered once a page is on screen.
    pub fn prev_enabled(&self) -> bool {
        self.state.ready().is_some() && can_prev(self.offset)
    }

    pub fn next_enabled(&self) -> bool {
        self.state
            .ready()
            .is_some_and(|p| can_next(self.offset, self.limit, p.total))
    }

    fn goto(&mut self, offset: u64) -> Option<ViewAction> {
        tracing::debug!(from = self.offset, to = offset, limit = self.limit, "events: page change");
        self.offset = offset;
        self.selected = 0;
        self.state = Load::Loading;
        Some(ViewAction::Fetch(self.request()))
    }

    pub fn handle(&mut self, event: &AppEvent) -> Option<ViewAction> {
        match event {
            AppEvent::Nav(Direction::Left) if self.prev_enabled() => {
                self.goto(self.offset.saturating_sub(self.limit))
            }
            AppEvent::Nav(Direction::Right) if self.next_enabled() => {
                self.goto(self.offset + self.limit)
            }
            AppEvent::Nav(Direction::Up) | AppEvent::Nav(Direction::Down) => {
                let len = self.state.ready().map_or(0, |p| p.items.len());
                let down = *event == AppEvent::Nav(Direction::Down);
                self.selected = step_selection(self.selected, len, down);
                None
            }
            AppEvent::Enter => self
                .state
                .ready()?
                .items
                .get(self.selected)
                .map(|e| ViewAction::Open(Route::EventDetail(e.id.to_string()))),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct EventsView<'a> {
    state: &'a EventsState,
    theme: &'a Theme,
}

impl<'a> EventsView<'a> {
    pub fn new(state: &'a EventsState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn button(&self, label: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            self.theme.muted.add_modifier(Modifier::DIM)
        };
        Span::styled(label, style)
    }
}

impl Widget for EventsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let page = match &self.state.state {
            Load::Loading => return render_message(area, buf, "Loading history...", self.theme.muted),
            Load::Failed => return render_message(area, buf, "Error loading events.", self.theme.error),
            Load::Ready(page) => page,
        };

        let [header, table] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
        let [title, paging] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(26)]).areas(header);

        let (start, end) = viewing_range(self.state.offset, page.items.len(), page.total);
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Event History",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Viewing ", self.theme.muted),
                Span::styled(format!("{start}–{end}"), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" of {} detected changes", page.total), self.theme.muted),
            ]),
        ])
        .render(title, buf);

        Paragraph::new(Line::from(vec![
            self.button("← Previous", self.state.prev_enabled()),
            Span::raw("   "),
            self.button("Next →", self.state.next_enabled()),
        ]))
        .alignment(Alignment::Right)
        .render(paging, buf);

        EventTable::new(&page.items, self.state.selected, self.theme)
            .block(Block::bordered().border_style(self.theme.border_focused))
            .date_header("Date Detected")
            .missing_date("N/A")
            .open_hint("View Full Details")
            .render(table, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
