//! Colour theme for the amdash TUI.
//!
//! Themes are defined as TOML files. Both built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types: mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    reversed: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.reversed {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawStats {
    blue: RawStyle,
    green: RawStyle,
    red: RawStyle,
    amber: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawNav {
    active: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawText {
    muted: RawStyle,
    json: RawStyle,
    error: RawStyle,
    selected: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawHealth {
    ok: RawStyle,
    down: RawStyle,
    unknown: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    stats: RawStats,
    borders: RawBorders,
    nav: RawNav,
    text: RawText,
    health: RawHealth,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Accent colour of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Red,
    Amber,
}

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    stat_blue: Style,
    stat_green: Style,
    stat_red: Style,
    stat_amber: Style,

    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Highlight for the active nav bar entry.
    pub nav_active: Style,

    pub muted: Style,
    /// Raw JSON payload text on the detail screen.
    pub json: Style,
    pub error: Style,
    /// Selected table row.
    pub selected: Style,

    pub health_ok: Style,
    pub health_down: Style,
    pub health_unknown: Style,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str("default", DEFAULT_THEME_SRC)
            .expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str("gruvbox", GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            _ => Self::load_default(),
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(name: &str, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            name: name.to_string(),
            stat_blue: raw.stats.blue.into_style(),
            stat_green: raw.stats.green.into_style(),
            stat_red: raw.stats.red.into_style(),
            stat_amber: raw.stats.amber.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            nav_active: raw.nav.active.into_style(),
            muted: raw.text.muted.into_style(),
            json: raw.text.json.into_style(),
            error: raw.text.error.into_style(),
            selected: raw.text.selected.into_style(),
            health_ok: raw.health.ok.into_style(),
            health_down: raw.health.down.into_style(),
            health_unknown: raw.health.unknown.into_style(),
        })
    }

    pub fn accent(&self, accent: Accent) -> Style {
        match accent {
            Accent::Blue => self.stat_blue,
            Accent::Green => self.stat_green,
            Accent::Red => self.stat_red,
            Accent::Amber => self.stat_amber,
        }
    }

    /// Style for the backend health dot; `None` means not probed yet.
    pub fn health_style(&self, health: Option<bool>) -> Style {
        match health {
            Some(true) => self.health_ok,
            Some(false) => self.health_down,
            None => self.health_unknown,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
