use live_markdown_engine::ParserConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key} in {config_path}: {reason}")]
    InvalidValue {
        config_path: PathBuf,
        key: &'static str,
        reason: String,
    },
}

/// Contents of `config.toml`. Every section is optional.
///
/// ```toml
/// [parser]
/// max_parsable_length = 500000
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = Self::expand_path(config_path.as_ref())
            .unwrap_or_else(|| config_path.as_ref().to_path_buf());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        Self::from_toml_str(&content, &config_path).map(Some)
    }

    /// Parses and validates TOML text; `config_path` only labels errors.
    pub fn from_toml_str(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.validate(config_path)?;
        Ok(config)
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        if self.parser.max_parsable_length == 0 {
            return Err(ConfigError::InvalidValue {
                config_path: config_path.to_path_buf(),
                key: "parser.max_parsable_length",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use live_markdown_engine::parsing::MAX_PARSABLE_LENGTH;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            parser: ParserConfig {
                max_parsable_length: 1234,
            },
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let path = Path::new("inline.toml");
        assert_eq!(
            Config::from_toml_str("", path).unwrap().parser.max_parsable_length,
            MAX_PARSABLE_LENGTH
        );
        assert_eq!(
            Config::from_toml_str("[parser]\n", path).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn test_max_parsable_length_from_toml() {
        let config_content = r#"
[parser]
max_parsable_length = 2048
"#;

        let config = Config::from_toml_str(config_content, Path::new("c.toml")).unwrap();
        assert_eq!(config.parser.max_parsable_length, 2048);
    }

    #[test]
    fn test_zero_length_is_invalid() {
        let err = Config::from_toml_str("[parser]\nmax_parsable_length = 0\n", Path::new("c.toml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidValue { key: "parser.max_parsable_length", .. }));
        assert_eq!(
            err.to_string(),
            "Invalid value for parser.max_parsable_length in c.toml: must be greater than zero"
        );
    }

    #[test]
    fn test_wrong_type_is_a_parse_error() {
        let err = Config::from_toml_str("[parser]\nmax_parsable_length = \"big\"\n", Path::new("c.toml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_parsable_length = 10000\n").unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            loaded_config,
            Config {
                parser: ParserConfig {
                    max_parsable_length: 10_000,
                },
            }
        );
    }

    #[test]
    fn test_load_expands_env_var_in_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[parser]\nmax_parsable_length = 77\n").unwrap();

        unsafe {
            env::set_var("LIVE_MARKDOWN_TEST_DIR", temp_dir.path());
        }

        let loaded = Config::load_from_path("$LIVE_MARKDOWN_TEST_DIR/config.toml")
            .unwrap()
            .unwrap();
        assert_eq!(loaded.parser.max_parsable_length, 77);

        unsafe {
            env::remove_var("LIVE_MARKDOWN_TEST_DIR");
        }
    }

    #[test]
    fn test_unreadable_path_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();

        let err = Config::load_from_path(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }
}
