//! Overview screen (`/`): aggregate counters and the latest events.
//!
//! Both requests are issued together and the screen only leaves `Loading`
//! once both have finished; if either failed the whole screen falls back to
//! "Could not load dashboard data."

use super::{render_message, step_selection, Load, ViewAction};
use crate::{
    event::{AppEvent, Direction},
    fetch::FetchRequest,
    routes::Route,
    theme::{Accent, Theme},
    widgets::{
        event_table::EventTable,
        stat_card::{self, StatCard},
    },
};
use amdash_core::{EventSummary, OverviewMetrics, Page};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewData {
    pub metrics: OverviewMetrics,
    pub latest: Page<EventSummary>,
}

#[derive(Debug)]
pub struct OverviewState {
    pub latest_limit: u64,
    pub state: Load<OverviewData>,
    pub selected: usize,
}

impl OverviewState {
    pub fn new(latest_limit: u64) -> Self {
        Self {
            latest_limit,
            state: Load::Loading,
            selected: 0,
        }
    }

    pub fn request(&self) -> FetchRequest {
        FetchRequest::Overview {
            latest_limit: self.latest_limit,
        }
    }

    pub fn apply(&mut self, metrics: Option<OverviewMetrics>, latest: Option<Page<EventSummary>>) {
        self.selected = 0;
        self.state = match (metrics, latest) {
            (Some(metrics), Some(latest)) => Load::Ready(OverviewData { metrics, latest }),
            _ => Load::Failed,
        };
        tracing::debug!(ready = self.state.ready().is_some(), "overview loaded");
    }

    pub fn handle(&mut self, event: &AppEvent) -> Option<ViewAction> {
        let data = self.state.ready()?;
        let len = data.latest.items.len();
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = step_selection(self.selected, len, false);
                None
            }
            AppEvent::Nav(Direction::Down) => {
                self.selected = step_selection(self.selected, len, true);
                None
            }
            AppEvent::Enter => data
                .latest
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

pub struct OverviewView<'a> {
    state: &'a OverviewState,
    theme: &'a Theme,
}

impl<'a> OverviewView<'a> {
    pub fn new(state: &'a OverviewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for OverviewView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let data = match &self.state.state {
            Load::Loading => {
                return render_message(area, buf, "Loading dashboard...", self.theme.muted)
            }
            Load::Failed => {
                return render_message(area, buf, "Could not load dashboard data.", self.theme.error)
            }
            Load::Ready(data) => data,
        };

        let partial = data.latest.is_partial();
        let [header, cards, table, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(if partial { 1 } else { 0 }),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                "Real-time summary of your monitored sources.",
                self.theme.muted,
            )),
        ])
        .render(header, buf);

        let m = &data.metrics;
        stat_card::render_row(
            vec![
                StatCard::new("Total Events", m.total_events, Accent::Blue, self.theme),
                StatCard::new("Total Added", m.sum_added, Accent::Green, self.theme),
                StatCard::new("Total Removed", m.sum_removed, Accent::Red, self.theme),
                StatCard::new("Total Updated", m.sum_updated, Accent::Amber, self.theme),
            ],
            cards,
            buf,
        );

        let block = Block::bordered()
            .title(" Latest Events ")
            .title_bottom(Line::from(" 2: see all events ").right_aligned())
            .border_style(self.theme.border_focused);
        EventTable::new(&data.latest.items, self.state.selected, self.theme)
            .block(block)
            .render(table, buf);

        if partial {
            Paragraph::new(Line::from(Span::styled(
                format!(
                    "Displaying the latest {} of {} total events.",
                    data.latest.items.len(),
                    data.latest.total
                ),
                self.theme.muted.add_modifier(Modifier::ITALIC),
            )))
            .render(footer, buf);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
