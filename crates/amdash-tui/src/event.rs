//! Semantic application events: crossterm key events mapped to a
//! view-agnostic vocabulary so views never touch crossterm directly.
//!
//! # Keybindings
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `1`                     | `OpenDashboard`            |
//! | `2`                     | `OpenEvents`               |
//! | `r`                     | `Reload`                   |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | `Esc`                   | `Escape`                   |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! While the command bar is open the event loop calls
//! [`to_app_event_insert`] instead: every printable character is forwarded
//! as `Char`, arrows still produce `Nav` for cursor movement, and only
//! `Ctrl+c`, `Escape`, `Enter`, and `Backspace` keep their special meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for row selection, scrolling and pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Jump to the overview screen.
    OpenDashboard,
    /// Jump to the events list.
    OpenEvents,
    /// Re-issue the active view's fetch.
    Reload,
    ScrollUp,
    ScrollDown,
    /// Move the selection (up/down) or the page (left/right).
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    Backspace,
    /// Open the selected row, or confirm the command line.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Go back, or dismiss the active modal.
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal mode).
///
/// Returns `None` for events that carry no meaning for the application
/// (mouse events, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for the command line.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Char('1') if key.modifiers == Mod::NONE => Some(AppEvent::OpenDashboard),
        Char('2') if key.modifiers == Mod::NONE => Some(AppEvent::OpenEvents),
        Char('r') if key.modifiers == Mod::NONE => Some(AppEvent::Reload),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => {
            Some(AppEvent::Nav(Direction::Right))
        }

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> Event {
        key(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(to_app_event(press(KeyCode::Char('q'))), Some(AppEvent::Quit));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }

    #[test]
    fn screen_shortcuts() {
        assert_eq!(
            to_app_event(press(KeyCode::Char('1'))),
            Some(AppEvent::OpenDashboard)
        );
        assert_eq!(
            to_app_event(press(KeyCode::Char('2'))),
            Some(AppEvent::OpenEvents)
        );
        assert_eq!(to_app_event(press(KeyCode::Char('r'))), Some(AppEvent::Reload));
    }

    #[test]
    fn nav_arrows_and_hjkl() {
        for (code, dir) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('k'), Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Char('h'), Direction::Left),
            (KeyCode::Right, Direction::Right),
            (KeyCode::Char('l'), Direction::Right),
        ] {
            assert_eq!(to_app_event(press(code)), Some(AppEvent::Nav(dir)));
        }
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(to_app_event(press(KeyCode::PageUp)), Some(AppEvent::ScrollUp));
        assert_eq!(to_app_event(press(KeyCode::PageDown)), Some(AppEvent::ScrollDown));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('u'))), Some(AppEvent::ScrollUp));
        assert_eq!(to_app_event(ctrl(KeyCode::Char('d'))), Some(AppEvent::ScrollDown));
    }

    #[test]
    fn help_and_command_chars_forwarded() {
        assert_eq!(to_app_event(press(KeyCode::Char('?'))), Some(AppEvent::Char('?')));
        assert_eq!(
            to_app_event(key(KeyCode::Char(':'), KeyModifiers::SHIFT)),
            Some(AppEvent::Char(':'))
        );
    }

    #[test]
    fn back_keys() {
        assert_eq!(to_app_event(press(KeyCode::Esc)), Some(AppEvent::Escape));
        assert_eq!(to_app_event(press(KeyCode::Backspace)), Some(AppEvent::Backspace));
        assert_eq!(to_app_event(press(KeyCode::Enter)), Some(AppEvent::Enter));
    }

    #[test]
    fn resize_event() {
        assert_eq!(to_app_event(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
    }

    #[test]
    fn unbound_key_returns_none() {
        assert_eq!(to_app_event(press(KeyCode::F(5))), None);
    }

    #[test]
    fn insert_mode_shortcuts_are_chars() {
        for ch in ['q', '1', '2', 'r', 'h', 'j', 'k', 'l', '/'] {
            assert_eq!(
                to_app_event_insert(press(KeyCode::Char(ch))),
                Some(AppEvent::Char(ch)),
                "insert mode: '{ch}' should produce Char"
            );
        }
    }

    #[test]
    fn insert_mode_ctrl_c_still_quits() {
        assert_eq!(to_app_event_insert(ctrl(KeyCode::Char('c'))), Some(AppEvent::Quit));
    }
}
