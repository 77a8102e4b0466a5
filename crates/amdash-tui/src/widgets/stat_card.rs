//! Stat card: a bordered box with an uppercase caption and one large number.

use crate::theme::{Accent, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

pub struct StatCard<'a> {
    title: &'a str,
    value: i64,
    accent: Accent,
    theme: &'a Theme,
}

impl<'a> StatCard<'a> {
    pub fn new(title: &'a str, value: i64, accent: Accent, theme: &'a Theme) -> Self {
        Self {
            title,
            value,
            accent,
            theme,
        }
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.title.to_uppercase(),
                self.theme.muted.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(self.value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled("●", self.theme.accent(self.accent)),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Render a row of equally sized stat cards across `area`.
pub fn render_row(cards: Vec<StatCard<'_>>, area: Rect, buf: &mut Buffer) {
    if cards.is_empty() {
        return;
    }
    let cols = Layout::horizontal(vec![Constraint::Fill(1); cards.len()]).split(area);
    for (card, col) in cards.into_iter().zip(cols.iter()) {
        card.render(*col, buf);
    }
}
