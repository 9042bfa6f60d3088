//! TOML configuration loading, `source = "..."` include resolution, and per-app override merging.
//!
//! Struct definitions live in `structs`; this module owns file I/O, cycle
//! detection and the merge strategy.

mod structs;

pub use structs::{AppConfig, ContextConfig, DEFAULT_PATTERN, FormatterConfig, InternalConfig};

use crate::internal;
use crate::level::Level;
use crate::pattern::ConversionFactory;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formatter: FormatterConfig,
    pub context: ContextConfig,
    /// Extra conversion words, each mapped onto an existing word.
    pub aliases: HashMap<String, String>,
    pub internal: InternalConfig,
    /// Formatter overrides keyed by application name.
    pub apps: HashMap<String, AppConfig>,
}

/// Splits `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining TOML.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let directive = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = directive {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the config from the default location with includes resolved.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be
    /// read, TOML parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_with_sources(&config_path, &mut HashSet::new())?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses TOML text. `source` lines are ignored since there is no base path.
    ///
    /// # Errors
    /// `ConfigParse` on invalid TOML.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            if source_file.is_relative()
                && let Some(parent) = path.parent()
            {
                source_file = parent.join(source_file);
            }
            if source_file.exists() {
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config's map fields into `self`. Keys already
    /// present win over the included ones.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.aliases {
            self.aliases.entry(k).or_insert(v);
        }
        for (k, v) in other.apps {
            self.apps.entry(k).or_insert(v);
        }
    }

    /// This config with the `[apps.<name>]` overrides applied to `[formatter]`
    /// and `application` set to `app_name` unless configured.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();
        if config.context.application.is_none() {
            config.context.application = Some(app_name.to_string());
        }

        if let Some(app) = self.apps.get(app_name) {
            if let Some(ref pattern) = app.pattern {
                config.formatter.pattern.clone_from(pattern);
            }
            if let Some(colors) = app.colors {
                config.formatter.colors = colors;
            }
            if let Some(include_error) = app.include_error {
                config.formatter.include_error = include_error;
            }
            if let Some(ref timezone) = app.timezone {
                config.formatter.timezone.clone_from(timezone);
            }
        }

        config
    }

    /// `<config dir>/patternlog/patternlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("patternlog").join("patternlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Threshold of the internal logger; unknown names fall back to `warn`.
    #[must_use]
    pub fn internal_level(&self) -> Level {
        self.internal.level.parse().unwrap_or(Level::Warn)
    }

    /// The built-in words plus the `[aliases]` table.
    ///
    /// Aliases naming an unknown word are skipped with a warning.
    #[must_use]
    pub fn conversion_factory(&self) -> ConversionFactory {
        let mut factory = ConversionFactory::new();
        let mut aliases: Vec<_> = self.aliases.iter().collect();
        aliases.sort();
        for (alias, word) in aliases {
            if !factory.alias(alias.as_str(), word) {
                internal::warn(
                    "CONFIG",
                    &format!("Alias '{alias}' points at unknown conversion word '{word}'"),
                );
            }
        }
        factory
    }
}
