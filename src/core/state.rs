use std::io::{self, Write};

use crate::core::config::Config;
use crate::core::env::VariableStore;
use crate::core::theme::{self, Theme};
use crate::input::history::History;

/// State that lives for one interpreter run: variables, history, the active theme,
/// and where output goes.
pub struct Session {
    pub vars: VariableStore,
    pub history: History,
    theme: Theme,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_writers(config, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Build a session that writes to the given sinks instead of stdout/stderr.
    pub fn with_writers(config: &Config, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            vars: VariableStore::new(),
            history: History::new(config.history_limit),
            theme: config.theme,
            out,
            err,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(from = %self.theme, to = %theme, "theme changed");
        self.theme = theme;
    }

    /// Write one themed line to standard output.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.theme.paint(text))
    }

    /// Write one themed line to standard error.
    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        self.out.flush()?;
        writeln!(self.err, "{}", self.theme.paint(text))?;
        self.err.flush()
    }

    /// Pass captured child output through untouched, after the theme prefix.
    pub fn write_captured(&mut self, bytes: &[u8]) -> io::Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        if self.theme == Theme::None {
            self.out.write_all(bytes)?;
        } else {
            self.out.write_all(theme::render_prefix(self.theme).as_bytes())?;
            self.out.write_all(bytes)?;
            self.out.write_all(theme::RESET.as_bytes())?;
        }
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
