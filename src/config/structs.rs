//! Configuration struct definitions.

use crate::fmt::ColorMode;
use serde::Deserialize;

/// Default pattern when the config names none.
pub const DEFAULT_PATTERN: &str = "%date %-5level [%thread] %logger{36} - %message";

/// `[formatter]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Pattern compiled by `PatternFormatter::from_config`.
    pub pattern: String,
    pub colors: ColorMode,
    /// Append the error chain after the formatted line.
    pub include_error: bool,
    /// Zone for `%date`/`%time` directives without a zone parameter.
    pub timezone: String,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            colors: ColorMode::default(),
            include_error: true,
            timezone: "local".to_string(),
        }
    }
}

/// `[context]` section, the values behind `%application` and `%node`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContextConfig {
    /// Defaults to the executable name.
    pub application: Option<String>,
    /// Defaults to the host name.
    pub node: Option<String>,
}

/// `[internal]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Threshold of the crate's own diagnostic logger.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// `[apps.<name>]` overrides; unset fields keep the top-level value.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub pattern: Option<String>,
    pub colors: Option<ColorMode>,
    pub include_error: Option<bool>,
    pub timezone: Option<String>,
}
