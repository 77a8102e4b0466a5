// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, fetch::Ticket, routes::Route, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    // Display help
    Help,
    // Navigate to any route path, e.g. `open /events/12`
    Open(Route),
    // Re-issue the active screen's fetch and the health probe
    Reload,
    // Change theme
    Theme(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "r" | "reload" => Ok(Command::Reload),
            "open" | "o" => {
                if rest.is_empty() {
                    return Err("usage: open <path>".to_string());
                }
                Route::parse(rest)
                    .map(Command::Open)
                    .ok_or_else(|| format!("no such page: {rest}"))
            }
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state, returning
/// any fetches it started.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Vec<Ticket> {
    match cmd {
        Command::Quit => {
            s.quit = true;
            Vec::new()
        }
        Command::Help => {
            s.show_help = !s.show_help;
            Vec::new()
        }
        Command::Open(route) => s.navigate(route).into_iter().collect(),
        Command::Reload => s.reload(),
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("q", Command::Quit)]
    #[case("quit!", Command::Quit)]
    #[case("help", Command::Help)]
    #[case("  reload ", Command::Reload)]
    #[case("open /events", Command::Open(Route::Events))]
    #[case("open /events/12", Command::Open(Route::EventDetail("12".into())))]
    #[case("o /runs/3", Command::Open(Route::RunDetail("3".into())))]
    #[case("theme gruvbox", Command::Theme("gruvbox".into()))]
    fn parses(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(Command::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("", "")]
    #[case("open", "usage: open <path>")]
    #[case("open /nowhere", "no such page: /nowhere")]
    #[case("theme", "usage: theme <default|gruvbox>")]
    #[case("frobnicate", "unknown command: frobnicate")]
    fn rejects(#[case] input: &str, #[case] message: &str) {
        assert_eq!(Command::parse(input), Err(message.to_string()));
    }
}
