//! Color palettes for the named themes.

use ratatui::style::Color;

use crate::config::{DEFAULT_THEME, THEMES};
use crate::timer::Mode;

/// Colors used to draw the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Borders and the header
    pub accent: Color,
    /// Focus period
    pub focus: Color,
    /// Short break
    pub short_break: Color,
    /// Long break
    pub long_break: Color,
}

impl Palette {
    /// Palette for a theme name. Unknown names get the default theme.
    #[must_use]
    pub fn for_theme(name: &str) -> Self {
        match name {
            "forest" => Self {
                accent: Color::Green,
                focus: Color::LightGreen,
                short_break: Color::Yellow,
                long_break: Color::Cyan,
            },
            "sunset" => Self {
                accent: Color::LightRed,
                focus: Color::Red,
                short_break: Color::Yellow,
                long_break: Color::Magenta,
            },
            "midnight" => Self {
                accent: Color::Blue,
                focus: Color::LightBlue,
                short_break: Color::Gray,
                long_break: Color::LightMagenta,
            },
            "lavender" => Self {
                accent: Color::Magenta,
                focus: Color::LightMagenta,
                short_break: Color::LightCyan,
                long_break: Color::LightBlue,
            },
            _ => Self {
                accent: Color::Cyan,
                focus: Color::LightCyan,
                short_break: Color::LightGreen,
                long_break: Color::LightBlue,
            },
        }
    }

    /// Color for a mode.
    #[must_use]
    pub const fn mode(&self, mode: Mode) -> Color {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }
}

/// The theme after `current`, wrapping around.
#[must_use]
pub fn next_theme(current: &str) -> &'static str {
    THEMES
        .iter()
        .position(|t| *t == current)
        .and_then(|i| THEMES.get((i + 1) % THEMES.len()))
        .copied()
        .unwrap_or(DEFAULT_THEME)
}
