//! Terminal colors for CLI output
//!
//! Human-facing messages (config commands, replay summaries) are colored
//! with plain ANSI escapes. Machine-readable output is never colored.
//! Setting `NO_COLOR` disables colors entirely.

/// ANSI escape codes used across the CLI.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
    pub const GRAY: &str = "\x1b[37m";
    pub const DARK_GRAY: &str = "\x1b[90m";
}

/// Color set for CLI messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color
    pub text_primary: &'static str,
    /// Secondary/dimmed text color
    pub text_secondary: &'static str,
    pub success: &'static str,
    /// False when colors are disabled; every helper then returns text as-is.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: ansi::GRAY,
            text_secondary: ansi::DARK_GRAY,
            success: ansi::GREEN,
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

/// Theme for the current process, honoring `NO_COLOR`.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some() {
        Theme::plain()
    } else {
        Theme::default()
    }
}
