//! Event detail (`/events/:id`): counters plus the raw JSON payload.
//!
//! The `id` path segment must be a finite number; anything else goes
//! straight to "Event not found." without touching the network. A fetched
//! payload that is not a JSON object is treated the same way.

use super::{render_message, Load};
use crate::{
    event::{AppEvent, Direction},
    fetch::FetchRequest,
    theme::{Accent, Theme},
    widgets::stat_card::{self, StatCard},
};
use amdash_core::{
    normalizer::{format_number, parse_number},
    EventDetail,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use serde_json::Value;

const PAGE_STEP: u16 = 10;

#[derive(Debug)]
pub struct DetailState {
    /// The path segment as typed.
    pub id: String,
    /// Canonical numeric id sent to the backend; `None` when `id` is not a
    /// finite number.
    request_id: Option<String>,
    pub state: Load<EventDetail>,
    /// Pretty-printed payload, built once per successful load.
    pub pretty: String,
    pub scroll: u16,
}

impl DetailState {
    pub fn new(id: &str) -> Self {
        let request_id = parse_number(id)
            .filter(|n| n.is_finite())
            .map(format_number);
        if request_id.is_none() {
            tracing::debug!(%id, "event id is not numeric");
        }
        let mut s = Self {
            id: id.to_string(),
            request_id,
            state: Load::Loading,
            pretty: String::new(),
            scroll: 0,
        };
        s.reset();
        s
    }

    pub fn request(&self) -> Option<FetchRequest> {
        self.request_id
            .clone()
            .map(|id| FetchRequest::Event { id })
    }

    /// Back to the initial state: `Loading` for a valid id, `Failed` otherwise.
    pub fn reset(&mut self) {
        self.state = if self.request_id.is_some() {
            Load::Loading
        } else {
            Load::Failed
        };
        self.pretty.clear();
        self.scroll = 0;
    }

    pub fn apply(&mut self, value: Option<Value>) {
        match value.and_then(EventDetail::from_value) {
            Some(detail) => {
                self.pretty = detail.pretty_raw();
                self.state = Load::Ready(detail);
            }
            None => {
                self.pretty.clear();
                self.state = Load::Failed;
            }
        }
        self.scroll = 0;
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.pretty.lines().count();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_scroll();
        self.scroll = match event {
            AppEvent::Nav(Direction::Up) => self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll.saturating_add(1).min(max),
            AppEvent::ScrollUp => self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll.saturating_add(PAGE_STEP).min(max),
            _ => return,
        };
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct DetailView<'a> {
    state: &'a DetailState,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(state: &'a DetailState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let detail = match &self.state.state {
            Load::Loading => {
                return render_message(area, buf, "Loading event details...", self.theme.muted)
            }
            Load::Failed => return render_message(area, buf, "Event not found.", self.theme.error),
            Load::Ready(detail) => detail,
        };
        let e = &detail.summary;

        let [header, cards, payload] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .areas(area);

        let date = if e.created_at.is_empty() {
            "Unknown date"
        } else {
            e.created_at.as_str()
        };
        let source = if e.source.is_empty() { "-" } else { e.source.as_str() };
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Event Details",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(format!("ID: #{} • {}", e.id, date), self.theme.muted)),
            Line::from(vec![
                Span::styled("Source: ", self.theme.muted),
                Span::raw(source.to_string()),
            ]),
        ])
        .render(header, buf);

        stat_card::render_row(
            vec![
                StatCard::new("Lines Added", e.added, Accent::Green, self.theme),
                StatCard::new("Lines Removed", e.removed, Accent::Red, self.theme),
                StatCard::new("Lines Updated", e.updated, Accent::Amber, self.theme),
            ],
            cards,
            buf,
        );

        let block = Block::bordered()
            .title(" Raw Payload (JSON) ")
            .title_bottom(Line::from(" ↑↓ scroll  esc back ").right_aligned())
            .border_style(self.theme.border_focused);
        Paragraph::new(self.state.pretty.as_str())
            .style(self.theme.json)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .block(block)
            .render(payload, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
