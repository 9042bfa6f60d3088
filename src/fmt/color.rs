//! ANSI decoration for the color and emphasis conversion words.
//!
//! Uses the 8 basic SGR colors so output stays readable on any terminal theme.
//! A disabled [`ConsoleFormatting`] returns text untouched, which is what file
//! outputs and `NO_COLOR` users get.

use crate::level::Level;
use serde::Deserialize;

/// Foreground SGR color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl AnsiColor {
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Lower-case conversion word for the color (`red`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Conversion word of the bold variant (`boldRed`).
    #[must_use]
    pub const fn bold_name(self) -> &'static str {
        match self {
            Self::Black => "boldBlack",
            Self::Red => "boldRed",
            Self::Green => "boldGreen",
            Self::Yellow => "boldYellow",
            Self::Blue => "boldBlue",
            Self::Magenta => "boldMagenta",
            Self::Cyan => "boldCyan",
            Self::White => "boldWhite",
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// SGR attribute codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Bold = 1,
    Italic = 3,
    Underline = 4,
}

impl Emphasis {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// When decoration should be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when writing to a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Decoration backend handed to every unit that colors its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleFormatting {
    enabled: bool,
}

impl Default for ConsoleFormatting {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleFormatting {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Never decorates.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Resolves a configured mode against the stream the output is headed for.
    #[must_use]
    pub fn from_mode(mode: ColorMode, is_terminal: bool) -> Self {
        match mode {
            ColorMode::Always => Self::new(true),
            ColorMode::Never => Self::new(false),
            ColorMode::Auto => Self::new(is_terminal && std::env::var_os("NO_COLOR").is_none()),
        }
    }

    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Wraps `text` in the SGR sequence for the given color and emphasis.
    ///
    /// Produces `ESC[31m..ESC[m`, `ESC[1;m..ESC[m` or `ESC[1;31m..ESC[m`.
    #[must_use]
    pub fn ansi(self, text: &str, color: Option<AnsiColor>, emphasis: Option<Emphasis>) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match (emphasis, color) {
            (None, None) => text.to_string(),
            (None, Some(c)) => format!("\x1b[{}m{text}\x1b[m", c.code()),
            (Some(e), None) => format!("\x1b[{};m{text}\x1b[m", e.code()),
            (Some(e), Some(c)) => format!("\x1b[{};{}m{text}\x1b[m", e.code(), c.code()),
        }
    }

    #[must_use]
    pub fn color(self, text: &str, color: AnsiColor) -> String {
        self.ansi(text, Some(color), None)
    }

    #[must_use]
    pub fn bold_color(self, text: &str, color: AnsiColor) -> String {
        self.ansi(text, Some(color), Some(Emphasis::Bold))
    }

    /// ERROR is bold red, WARN red, INFO blue; lower levels stay undecorated.
    #[must_use]
    pub fn highlight(self, level: Level, text: &str) -> String {
        match level {
            Level::Error => self.bold_color(text, AnsiColor::Red),
            Level::Warn => self.color(text, AnsiColor::Red),
            Level::Info => self.color(text, AnsiColor::Blue),
            Level::Debug | Level::Trace => text.to_string(),
        }
    }
}
