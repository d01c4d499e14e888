//! Runtime configuration, read from `dualmodel.toml`.

pub mod schema;

use std::{fs, io, path::Path};
use thiserror::Error as ThisError;

pub use schema::{Config, LogConfig, LogLevel, TransformConfig};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "dualmodel.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    CannotRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("cannot render config: {0}")]
    CannotRenderToml(String),
}

impl Config {
    /// Parse a configuration from TOML text. Missing sections take defaults.
    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))
    }

    /// Load a configuration file; the file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::CannotRead {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Load a configuration file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Render the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::CannotRenderToml(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualmodel_primitives::CoercionPolicy;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.transform.coercion, CoercionPolicy::Strict);
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn parses_all_sections() {
        let config = Config::from_toml_str(
            r#"
            [transform]
            coercion = "numeric_widen"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.transform.coercion, CoercionPolicy::NumericWiden);
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml_str("[transform]\nstrict = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = Config::from_toml_str("[transform]\ncoercion = \"lossy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());

        let err = Config::load(dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::CannotRead { .. }));
    }

    #[test]
    fn loads_from_disk_and_renders_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nlevel = \"warn\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.log.level, LogLevel::Warn);

        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::from_toml_str(&rendered).unwrap(), config);
    }
}
