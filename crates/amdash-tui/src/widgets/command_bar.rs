//! Vim-style command bar: a single-line overlay at the bottom of the screen.
//!
//! Activated by pressing `:`. Displays a `:` prefix followed by the typed
//! command. `Enter` parses and executes it (see [`crate::commands`]);
//! `Escape` cancels. Both are handled by the app shell; this widget only
//! edits text.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// The text typed after the `:` prefix.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Error message from the last failed command, cleared on the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    /// Reset to a blank, error-free state. Call when opening the bar.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.error = None;
    }

    /// Apply a text-editing event.
    pub fn handle(&mut self, event: &AppEvent) {
        // Any keypress dismisses the error display so the user can edit again.
        self.error = None;

        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.input.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                }
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.input[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    /// Absolute terminal column of the text cursor within `area`.
    ///
    /// The `:` glyph occupies column 0, so the cursor starts at column 1.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let col = 1 + self.input[..self.cursor].chars().count() as u16;
        (area.x + col).min(area.right().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// Single-row command-bar overlay. The caller passes a 1-row `Rect`.
pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let line = if let Some(ref err) = self.state.error {
            Line::from(Span::styled(format!("E  {err}"), self.theme.error))
        } else {
            Line::from(vec![
                Span::styled(
                    ":",
                    self.theme.border_command_bar.add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.state.input.as_str(), Style::default()),
            ])
        };

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
