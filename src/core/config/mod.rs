use std::{fmt, path::PathBuf};

mod loader;
mod paths;

use crate::core::theme::Theme;
use crate::flags::Flags;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

/// Settings fixed at startup: defaults, then the rc file, then command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub history_limit: Option<usize>,
    pub quiet: bool,
}

impl Config {
    pub fn load(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = match flags.get_value("config") {
            Some(path) => ConfigPaths::with_rc(path),
            None => ConfigPaths::new(),
        };
        Self::load_from(&paths, flags)
    }

    pub fn load_from(paths: &ConfigPaths, flags: &Flags) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        ConfigLoader::new(paths).load_configs(&mut config)?;
        config.apply_flags(flags)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    fn apply_flags(&mut self, flags: &Flags) -> Result<(), ConfigError> {
        if let Some(theme) = flags.get_value("theme") {
            self.theme = loader::parse_theme(theme)?;
        }
        self.quiet |= flags.is_set("quiet");
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(PathBuf),
    InvalidLine(usize, String),
    InvalidValue { key: &'static str, value: String },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::InvalidLine(line, text) => {
                write!(f, "line {}: expected key = value, got '{}'", line, text)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
