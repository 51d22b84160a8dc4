use std::{fs, path::Path};

use super::{Config, ConfigError, ConfigPaths};
use crate::core::theme::Theme;

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let Some(path) = &self.paths.rc_path else {
            return Ok(());
        };

        if path.exists() {
            self.source_file(path, config)
        } else if self.paths.explicit {
            Err(ConfigError::ConfigFileNotFound(path.clone()))
        } else {
            Ok(())
        }
    }

    fn source_file(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        tracing::debug!(path = %path.display(), "loading rc file");
        let content = fs::read_to_string(path)?;
        for (index, line) in content.lines().enumerate() {
            self.process_line(index + 1, line, config)?;
        }
        Ok(())
    }

    fn process_line(&self, line_no: usize, line: &str, config: &mut Config) -> Result<(), ConfigError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::InvalidLine(line_no, line.to_string()));
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "theme" => config.theme = parse_theme(value)?,
            "history_limit" => config.history_limit = Some(parse_limit(value)?),
            _ => tracing::warn!(key, line = line_no, "ignoring unknown config key"),
        }
        Ok(())
    }
}

pub(super) fn parse_theme(value: &str) -> Result<Theme, ConfigError> {
    match value {
        "none" => Ok(Theme::None),
        name => Theme::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
            key: "theme",
            value: value.to_string(),
        }),
    }
}

fn parse_limit(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidValue {
            key: "history_limit",
            value: value.to_string(),
        }),
    }
}
