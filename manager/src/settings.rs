//! Runtime settings, loaded from an optional `town-graph.toml`.
//!
//! Every setting has a default, so a missing file is not an error. CLI flags
//! and environment variables override whatever the file says.
//!
//! ```toml
//! source_file = "data/towns.txt"
//! max_towns = 50000
//! log_filter = "town_graph_manager=debug"
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ManagerError, Result};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "town-graph.toml";

pub const DEFAULT_MAX_TOWNS: usize = 100_000;
pub const MAX_TOWNS_LIMIT: usize = 10_000_000;
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Road file to import on startup.
    pub source_file: Option<PathBuf>,

    /// Import fails if the graph ends up with more towns than this.
    pub max_towns: usize,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_file: None,
            max_towns: DEFAULT_MAX_TOWNS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let settings: Settings = toml::from_str(content).map_err(|e| ManagerError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        settings.validate().map_err(|message| ManagerError::Settings {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(settings)
    }

    /// Check value ranges.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(1..=MAX_TOWNS_LIMIT).contains(&self.max_towns) {
            return Err(format!(
                "max_towns must be between 1 and {}, got {}",
                MAX_TOWNS_LIMIT, self.max_towns
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(content: &str) -> Result<Settings> {
        Settings::parse(content, Path::new("test.toml"))
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.source_file, None);
        assert_eq!(s.max_towns, 100_000);
        assert_eq!(s.log_filter, "warn");
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let s = parse("source_file = \"towns.txt\"\n").unwrap();
        assert_eq!(s.source_file, Some(PathBuf::from("towns.txt")));
        assert_eq!(s.max_towns, DEFAULT_MAX_TOWNS);
    }

    #[test]
    fn test_full_file() {
        let s = parse(
            r#"
            source_file = "data/md.txt"
            max_towns = 500
            log_filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(s.max_towns, 500);
        assert_eq!(s.log_filter, "debug");
    }

    #[test]
    fn test_out_of_range() {
        let err = parse("max_towns = 0").unwrap_err();
        assert!(matches!(err, ManagerError::Settings { .. }));
        assert!(err.to_string().contains("max_towns must be between 1"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(parse("max_roads = 3"), Err(ManagerError::Settings { .. })));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // A directory exists but can't be read as a file
        let dir = std::env::temp_dir();
        assert!(matches!(Settings::load(&dir), Err(ManagerError::Io(_))));
    }

    #[test]
    fn test_missing_file_is_defaults() {
        let s = Settings::load(Path::new("/definitely/not/here/town-graph.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }
}
