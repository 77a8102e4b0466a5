//! Event table: `#id | date | hint` rows shared by the overview and the
//! events list.

use crate::theme::Theme;
use amdash_core::EventSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

pub struct EventTable<'a> {
    items: &'a [EventSummary],
    selected: usize,
    block: Block<'a>,
    date_header: &'a str,
    /// Shown in the date column when `created_at` is empty.
    missing_date: &'a str,
    open_hint: &'a str,
    theme: &'a Theme,
}

impl<'a> EventTable<'a> {
    pub fn new(items: &'a [EventSummary], selected: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            selected,
            block: Block::bordered().border_style(theme.border_focused),
            date_header: "Date",
            missing_date: "-",
            open_hint: "View details →",
            theme,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = block;
        self
    }

    pub fn date_header(mut self, header: &'a str) -> Self {
        self.date_header = header;
        self
    }

    pub fn missing_date(mut self, placeholder: &'a str) -> Self {
        self.missing_date = placeholder;
        self
    }

    pub fn open_hint(mut self, hint: &'a str) -> Self {
        self.open_hint = hint;
        self
    }
}

impl Widget for EventTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from(Line::from(self.date_header).alignment(Alignment::Right)),
            Cell::from(""),
        ])
        .style(self.theme.muted.add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = if e.created_at.is_empty() {
                    self.missing_date.to_string()
                } else {
                    e.created_at.clone()
                };
                // Only the highlighted row advertises Enter.
                let hint = if i == self.selected { self.open_hint } else { "" };
                Row::new(vec![
                    Cell::from(format!("#{}", e.id)).style(self.theme.muted),
                    Cell::from(Line::from(date).alignment(Alignment::Right)),
                    Cell::from(Line::from(hint).alignment(Alignment::Right)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Fill(1),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(self.block)
        .row_highlight_style(self.theme.selected);

        let mut state = TableState::default();
        if !self.items.is_empty() {
            state.select(Some(self.selected.min(self.items.len() - 1)));
        }
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
