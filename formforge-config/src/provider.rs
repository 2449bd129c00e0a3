//! Configuration provider using Figment

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

use crate::discovery::{discover, ConfigFile, ConfigFormat};
use crate::error::{ConfigError, ConfigResult};
use crate::types::BuilderConfig;

/// Prefix of environment variables read as configuration
pub const ENV_PREFIX: &str = "FORMFORGE_";

/// Loads [`BuilderConfig`] from defaults, a configuration file and the
/// environment. Nothing is cached; every `load` reads fresh.
#[derive(Debug, Clone, Default)]
pub struct ConfigProvider {
    file: Option<PathBuf>,
    search_dir: Option<PathBuf>,
}

impl ConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this file instead of discovering one. A missing file is an error.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Discover the configuration file in `dir` instead of the working
    /// directory.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    pub fn load(&self) -> ConfigResult<BuilderConfig> {
        let config: BuilderConfig = self.build_figment()?.extract()?;
        config.validate()?;
        debug!(
            log_level = %config.log_level,
            preview_policy = %config.drag.preview_policy,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    ///
    /// Later sources override earlier ones:
    /// 1. Built-in defaults
    /// 2. The explicit or discovered configuration file
    /// 3. `FORMFORGE_` environment variables, `__` separating nested keys
    pub fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(BuilderConfig::default()));
        if let Some(file) = self.config_file()? {
            debug!("using config file {}", file.path.display());
            figment = figment.merge(file_provider(&file));
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn config_file(&self) -> ConfigResult<Option<ConfigFile>> {
        if let Some(path) = &self.file {
            return ConfigFile::explicit(path).map(Some);
        }
        let dir = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|_| ConfigError::CurrentDirectoryNotFound)?,
        };
        let found = discover(&dir);
        if found.is_none() {
            trace!("no config file in {}", dir.display());
        }
        Ok(found)
    }
}

fn file_provider(file: &ConfigFile) -> Figment {
    match file.format {
        ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
        ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
        ConfigFormat::Json => Figment::from(Json::file(&file.path)),
    }
}

/// Load configuration from `explicit`, or the file discovered in the working
/// directory, layered under the environment.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult<BuilderConfig> {
    match explicit {
        Some(path) => ConfigProvider::new().with_file(path).load(),
        None => ConfigProvider::new().load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_drag::PreviewPolicy;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = ConfigProvider::new()
            .with_search_dir(dir.path())
            .load()
            .unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    #[serial]
    fn test_toml_file_is_discovered() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("formforge.toml"),
            r#"
log_level = "info"

[drag]
preview_policy = "buffered"
activation_delay_ms = 150
"#,
        )
        .unwrap();

        let config = ConfigProvider::new()
            .with_search_dir(dir.path())
            .load()
            .unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.drag.preview_policy, PreviewPolicy::Buffered);
        assert_eq!(config.drag.activation_delay_ms, 150);
        assert_eq!(config.drag.activation_tolerance_px, 5.0);
        assert!(config.export.pretty);
    }

    #[test]
    #[serial]
    fn test_explicit_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "export:\n  pretty: false\n").unwrap();

        let config = ConfigProvider::new().with_file(&path).load().unwrap();
        assert!(!config.export.pretty);
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("formforge.json"), r#"{"drag": {"preview_policy": "eager"}}"#)
            .unwrap();

        let err = ConfigProvider::new()
            .with_search_dir(dir.path())
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
