//! Config - Host Application Settings
//!
//! Loaded once at startup from `signin-gui.toml` in the platform config
//! directory, or from the file named by `SIGNIN_GUI_CONFIG`. A missing file
//! means defaults; a malformed one is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::info;

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::{ParseConfigSnafu, ReadConfigSnafu, Result};
use crate::helpers::config_dir;
use crate::i18n::Locale;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SIGNIN_GUI_CONFIG";

const CONFIG_FILE_NAME: &str = "signin-gui.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `en` or `zh-CN`; detected from the system when unset
    pub locale: Option<String>,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Initial window size in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
    /// Also write a daily-rolling log file
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: false,
        }
    }
}

impl AppConfig {
    /// Where the config file is read from
    pub fn path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(config_dir()?.join(CONFIG_FILE_NAME)),
        }
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, returning defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        Self::parse(&content).context(ParseConfigSnafu { path })
    }

    /// Parse TOML text; an empty document yields defaults
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content)
    }

    /// The configured locale, or the system one when unset or unsupported
    pub fn resolved_locale(&self) -> Locale {
        match self.locale.as_deref().filter(|tag| !tag.trim().is_empty()) {
            Some(tag) => Locale::from_tag(tag).unwrap_or_else(|| {
                info!(tag, "Unsupported locale in config, detecting from system");
                Locale::detect()
            }),
            None => Locale::detect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::parse("  \n").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.log.filter, "info");
        assert!(!config.log.file);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AppConfig::parse(
            r#"
locale = "zh-CN"

[window]
width = 800.0

[log]
file = true
"#,
        )
        .expect("partial config parses");

        assert_eq!(config.locale.as_deref(), Some("zh-CN"));
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert!(config.log.file);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(AppConfig::parse("[window]\nwidth = \"wide\"").is_err());
    }

    #[test]
    fn configured_locale_wins() {
        let config = AppConfig {
            locale: Some("zh_CN.UTF-8".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_locale(), Locale::ZhCN);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("signin-gui-does-not-exist.toml");
        let config = AppConfig::load_from(&path).expect("missing file is not an error");
        assert_eq!(config, AppConfig::default());
    }
}
