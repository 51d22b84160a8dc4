use std::fmt;

pub const RESET: &str = "\x1b[0m";

/// Colour applied to everything the interpreter itself prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    None,
    Red,
    Green,
    Blue,
}

impl Theme {
    /// Look up one of the names the `theme` built-in accepts.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "red" => Some(Theme::Red),
            "green" => Some(Theme::Green),
            "blue" => Some(Theme::Blue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::None => "none",
            Theme::Red => "red",
            Theme::Green => "green",
            Theme::Blue => "blue",
        }
    }

    /// Wrap `text` in this theme's prefix and the reset sequence.
    pub fn paint(self, text: &str) -> String {
        match self {
            Theme::None => text.to_string(),
            _ => format!("{}{}{}", render_prefix(self), text, RESET),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ANSI sequence emitted before themed output. Empty when no theme is active.
pub fn render_prefix(theme: Theme) -> &'static str {
    match theme {
        Theme::None => "",
        Theme::Red => "\x1b[0;31m",
        Theme::Green => "\x1b[0;32m",
        Theme::Blue => "\x1b[0;34m",
    }
}
