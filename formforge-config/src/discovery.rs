//! Configuration file discovery
//!
//! Looks for `formforge.{toml,yaml,yml,json}` in a single directory. The
//! first match in that order wins; later candidates are not merged.

use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::{ConfigError, ConfigResult};

/// Base name of a discoverable configuration file.
pub const CONFIG_FILE_STEM: &str = "formforge";

const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext).ok_or_else(|| ConfigError::UnsupportedFormat {
            format: if ext.is_empty() {
                path.display().to_string()
            } else {
                ext.to_string()
            },
        })
    }
}

/// A configuration file together with its detected format
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Validate an explicitly named file.
    pub fn explicit(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        if !path.is_file() {
            return Err(ConfigError::FileNotFound { path });
        }
        Ok(Self { path, format })
    }
}

/// Find the configuration file in `dir`, if any.
pub fn discover(dir: &Path) -> Option<ConfigFile> {
    EXTENSIONS.iter().find_map(|ext| {
        let path = dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));
        trace!("checking for config file {}", path.display());
        let format = ConfigFormat::from_extension(ext)?;
        path.is_file().then_some(ConfigFile { path, format })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_discover_prefers_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("formforge.json"), "{}").unwrap();
        fs::write(dir.path().join("formforge.toml"), "").unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.format, ConfigFormat::Toml);
    }

    #[test]
    fn test_discover_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(discover(dir.path()).is_none());
    }

    #[test]
    fn test_explicit_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ConfigFile::explicit(dir.path().join("missing.toml")),
            Err(ConfigError::FileNotFound { .. })
        ));
        assert!(matches!(
            ConfigFile::explicit(dir.path().join("settings.ini")),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }
}
