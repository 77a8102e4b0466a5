//! Run detail (`/runs/:id`). The backend exposes no run endpoint yet, so
//! this screen only acknowledges the id and fetches nothing.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    pub id: String,
}

impl RunState {
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

pub struct RunView<'a> {
    state: &'a RunState,
    theme: &'a Theme,
}

impl<'a> RunView<'a> {
    pub fn new(state: &'a RunState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for RunView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top = area.height.saturating_sub(2) / 2;
        let body = Rect {
            y: area.y + top,
            height: area.height.saturating_sub(top),
            ..area
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Run #{}", self.state.id),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Run details are not available yet.",
                self.theme.muted,
            )),
        ])
        .alignment(Alignment::Center)
        .render(body, buf);
    }
}
