//! Nav bar widget: the one-line strip at the top of the screen.

use crate::routes::Section;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

/// Renders the top-level sections with the active one highlighted, followed
/// by the backend address, a health dot and the keybinding hints.
pub struct NavBar<'a> {
    active: Section,
    base_url: &'a str,
    health: Option<bool>,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(active: Section, base_url: &'a str, health: Option<bool>, theme: &'a Theme) -> Self {
        Self {
            active,
            base_url,
            health,
            theme,
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| Line::from(format!(" {}:{} ", i + 1, s.label())))
            .collect();
        let selected = Section::ALL.iter().position(|s| *s == self.active);

        Tabs::new(labels)
            .select(selected)
            .highlight_style(self.theme.nav_active.add_modifier(Modifier::BOLD))
            .divider("")
            .render(area, buf);

        // Backend address and health at the right edge, hints after them
        let hint = " q:quit  ?:help ";
        let status = Line::from(vec![
            Span::styled(self.base_url, self.theme.muted),
            Span::raw(" "),
            Span::styled("●", self.theme.health_style(self.health)),
        ]);
        let status_width = status.width() as u16;
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        let status_x = hint_x.saturating_sub(status_width + 1).max(area.x);

        buf.set_line(status_x, area.y, &status, hint_x.saturating_sub(status_x));
        buf.set_string(hint_x, area.y, hint, Style::default().add_modifier(Modifier::DIM));
    }
}
