//! ANSI color codes for terminal output.
//!
//! Used by the automaton dump and the match tracer:
//! - Blue: state ids
//! - Green: pattern text and matched symbols
//! - Dim: failure links, table structure, metadata
//! - Reset: return to default

/// ANSI color palette.
///
/// Only standard 16-color codes, readable on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Plain text; every code is empty.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in a state-id color.
    pub fn state(&self, text: impl std::fmt::Display) -> String {
        format!("{}{}{}", self.blue, text, self.reset)
    }

    /// Wrap `text` in a pattern color.
    pub fn pattern(&self, text: impl std::fmt::Display) -> String {
        format!("{}{}{}", self.green, text, self.reset)
    }

    /// Wrap `text` in the dim modifier.
    pub fn faint(&self, text: impl std::fmt::Display) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }
}
