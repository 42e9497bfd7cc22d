//! Configuration module for the bqlt CLI.
//!
//! Settings are read from `bqlt.toml`. Every field has a default, so a
//! missing file or a partial file is fine; command-line flags override
//! whatever the file says.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::{OutputFormat, TerminatorSetting};
use crate::error::{BqltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "bqlt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[lexer]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Terminator source files are split on.
    #[serde(default)]
    pub line_terminator: TerminatorSetting,

    /// Drop whitespace tokens from listings.
    #[serde(default)]
    pub skip_trivia: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Token listing format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/bqlt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BqltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| BqltError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| BqltError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("bqlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("bqlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.lexer.line_terminator, TerminatorSetting::Platform);
        assert!(!config.lexer.skip_trivia);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("bqlt.toml");

        let original = Config {
            verbose: true,
            lexer: LexerConfig {
                line_terminator: TerminatorSetting::Crlf,
                skip_trivia: true,
            },
            output: OutputConfig {
                format: OutputFormat::Json,
            },
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bqlt.toml");
        std::fs::write(&config_path, "[lexer]\nskip_trivia = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.lexer.skip_trivia);
        assert_eq!(config.lexer.line_terminator, TerminatorSetting::Platform);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bqlt.toml");
        std::fs::write(&config_path, "[output]\nformat = \"yaml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(BqltError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/bqlt.toml"));
        assert!(result.is_err());
    }
}
