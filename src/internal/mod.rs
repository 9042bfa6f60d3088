//! The crate's own diagnostic logger, set up early so config problems and
//! CLI failures are reported through a compiled pattern like any other line.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! entry points race to call `init`.

use crate::config::Config;
use crate::fmt::{ColorMode, ConsoleFormatting, TimeZoneSpec};
use crate::level::Level;
use crate::pattern::{self, CompiledPattern, ConversionFactory, FormatContext};
use crate::record::LogRecord;
use std::io::{IsTerminal, Write};
use std::sync::OnceLock;

/// Layout of every internal line; the scope is rendered as `%logger`.
pub const INTERNAL_PATTERN: &str = "%time %highlight(%-5level) [%logger] %message";

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

#[derive(Debug)]
struct InternalLogger {
    threshold: Level,
    pattern: CompiledPattern,
}

impl InternalLogger {
    fn new(threshold: Level, colors: ColorMode) -> Self {
        let context = FormatContext::default()
            .console(ConsoleFormatting::from_mode(
                colors,
                std::io::stderr().is_terminal(),
            ))
            .timezone(TimeZoneSpec::Local);
        let pattern =
            pattern::compile_with(INTERNAL_PATTERN, &ConversionFactory::global(), &context)
                .unwrap_or_default();
        Self { threshold, pattern }
    }

    fn log(&self, level: Level, scope: &str, msg: &str) {
        if level < self.threshold {
            return;
        }
        let record = LogRecord::new(scope, level, msg);
        let line = self.pattern.render(&record);
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }
}

/// Loads the default config itself to find the threshold. Only the first
/// call to any initializer takes effect.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        InternalLogger::new(config.internal_level(), config.formatter.colors)
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Reuses an already-loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER
        .get_or_init(|| InternalLogger::new(config.internal_level(), config.formatter.colors));
    if !was_init {
        debug(
            "INTERNAL",
            &format!("Internal level: {}", config.internal_level()),
        );
        debug(
            "INTERNAL",
            &format!("Formatter pattern: {}", config.formatter.pattern),
        );
    }
}

/// Explicit threshold, no config involved.
pub fn init_with_level(level: Level) {
    INTERNAL_LOGGER.get_or_init(|| InternalLogger::new(level, ColorMode::Auto));
}

/// Calls made before initialization are dropped.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Startup and teardown diagnostics.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies such as a missing include or an unknown alias target.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
