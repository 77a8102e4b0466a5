//! Help popup: centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("1  /  2", "Dashboard / Events"),
    ("↑ k  /  ↓ j", "Select row or scroll payload"),
    ("← h  /  → l", "Previous / next page"),
    ("Enter", "Open selected event"),
    ("Esc  /  Backspace", "Go back"),
    ("PageUp  /  Ctrl+u", "Scroll payload up"),
    ("PageDown / Ctrl+d", "Scroll payload down"),
    ("r", "Reload current screen"),
    (":", "Command line (open <path>, reload, theme, q)"),
    ("q  /  Ctrl+c", "Quit"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" amdash — keybindings (? to close) ")
            .border_style(self.theme.border_focused.add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<22}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
