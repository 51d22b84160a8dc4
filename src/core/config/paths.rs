use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    /// Set when the path came from `--config`; such a file has to exist.
    pub explicit: bool,
}

impl ConfigPaths {
    /// `~/.cshellrc`, or nothing when no home directory can be found.
    pub fn new() -> Self {
        Self {
            rc_path: dirs::home_dir().map(|home| home.join(".cshellrc")),
            explicit: false,
        }
    }

    pub fn with_rc(path: impl Into<PathBuf>) -> Self {
        Self {
            rc_path: Some(path.into()),
            explicit: true,
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rc_lives_in_home() {
        let paths = ConfigPaths::new();
        assert!(!paths.explicit);
        if let (Some(rc), Some(home)) = (paths.rc_path, dirs::home_dir()) {
            assert_eq!(rc, home.join(".cshellrc"));
        }
    }

    #[test]
    fn test_explicit_rc() {
        let paths = ConfigPaths::with_rc("/tmp/custom.rc");
        assert!(paths.explicit);
        assert_eq!(paths.rc_path, Some(PathBuf::from("/tmp/custom.rc")));
    }
}
