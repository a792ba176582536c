//! CLI configuration and settings management

use crate::{CliError, Result};
use clap::ValueEnum;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration loaded from config files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// How inference results are printed
    pub output: OutputConfig,

    /// Logging defaults, overridden by command-line flags
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format, `text` when unset
    pub format: Option<OutputFormat>,

    /// Pad expressions so that `=>` lines up, on when unset
    pub align: Option<bool>,
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn align(&self) -> bool {
        self.align.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as `debug` or `hm_typing=trace`
    pub level: Option<String>,

    /// Log output format
    pub format: Option<LogFormat>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = if let Some(path) = config_path {
            Self::load_from_file(path)?
        } else {
            let mut config = Self::default();

            // Try current directory
            if let Ok(local_config) = Self::load_from_file(Path::new("hm.toml")) {
                config = config.merge(local_config);
            }

            // Try home directory
            if let Some(home_dir) = dirs::home_dir() {
                let home_config = home_dir.join(".hm.toml");
                if let Ok(home_config) = Self::load_from_file(&home_config) {
                    config = config.merge(home_config);
                }
            }

            // Try system config directory
            if let Some(system_config) = Self::default_config_path() {
                if let Ok(system_config) = Self::load_from_file(&system_config) {
                    config = config.merge(system_config);
                }
            }

            config
        };

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::read(path).map_err(|e| CliError::Config(format!("{:#}", e)))
    }

    fn read(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| CliError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge this configuration with another, field by field, with the
    /// other taking precedence wherever it sets a value.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output: OutputConfig {
                format: other.output.format.or(self.output.format),
                align: other.output.align.or(self.output.align),
            },
            logging: LoggingConfig {
                level: other.logging.level.or(self.logging.level),
                format: other.logging.format.or(self.logging.format),
            },
        }
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hm").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.output.format(), OutputFormat::Text);
        assert!(config.output.align());
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = CliConfig::default();
        config.logging.format = Some(LogFormat::Json);
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: CliConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = CliConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.output.format(), OutputFormat::Json);
        assert_eq!(config.output.align, None);
        assert!(config.output.align());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_file_operations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hm.toml");
        let mut config = CliConfig::default();
        config.output.align = Some(false);
        config.logging.level = Some("debug".to_string());

        config.save_to_file(&path).unwrap();
        let loaded = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"yaml\"").unwrap();

        let err = CliConfig::load_from_file(file.path()).unwrap_err();
        let CliError::Config(message) = err else {
            panic!("expected a configuration error");
        };
        assert!(message.contains("Failed to parse config file"));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = CliConfig::default();
        base.logging.level = Some("info".to_string());
        let mut other = CliConfig::default();
        other.output.format = Some(OutputFormat::Json);

        let merged = base.merge(other);
        assert_eq!(merged.output.format(), OutputFormat::Json);
        assert_eq!(merged.logging.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_partial_files_merge_field_by_field() {
        let mut local = NamedTempFile::new().unwrap();
        writeln!(local, "[output]\nalign = false").unwrap();
        let mut home = NamedTempFile::new().unwrap();
        writeln!(home, "[output]\nformat = \"json\"").unwrap();

        let merged = CliConfig::default()
            .merge(CliConfig::load_from_file(local.path()).unwrap())
            .merge(CliConfig::load_from_file(home.path()).unwrap());
        assert!(!merged.output.align());
        assert_eq!(merged.output.format(), OutputFormat::Json);
    }
}
