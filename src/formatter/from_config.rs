//! Formatter construction from patternlog config files.

use super::PatternFormatter;
use crate::Error;
use crate::config::Config;
use crate::internal;
use crate::pattern::FormatContext;
use std::sync::Arc;

impl PatternFormatter {
    /// Builds the formatter described by the default config file.
    ///
    /// # Errors
    /// Config loading errors, or a compile error for the configured pattern.
    pub fn from_default_config(app_name: &str) -> Result<Self, Error> {
        internal::debug("FORMATTER", "Building formatter from config");
        let config = Config::load()?;
        Self::from_config(&config, app_name)
    }

    /// Builds the formatter for `app_name`, applying its `[apps.<name>]`
    /// overrides and the `[aliases]` table.
    ///
    /// # Errors
    /// An unknown configured time zone, or a compile error for the pattern.
    pub fn from_config(config: &Config, app_name: &str) -> Result<Self, Error> {
        internal::debug("FORMATTER", &format!("Initializing formatter for app={app_name}"));
        let config = config.for_app(app_name);
        let context = FormatContext::from_config(&config)?;
        let factory = Arc::new(config.conversion_factory());

        let formatter = Self::with_factory(&config.formatter.pattern, factory, &context)
            .inspect_err(|e| internal::error("FORMATTER", &e.to_string()))?
            .include_error(config.formatter.include_error);
        internal::debug(
            "FORMATTER",
            &format!("Compiled pattern: {}", config.formatter.pattern),
        );
        Ok(formatter)
    }
}
