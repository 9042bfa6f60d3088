//! Utility functions for the CLI.

use crate::level::Level;
use crate::record::LogRecord;

/// Record fields given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub level: Level,
    pub logger: String,
    pub thread: Option<String>,
    pub mdc: Vec<String>,
    pub message: Vec<String>,
}

impl RenderArgs {
    /// The record described by these arguments.
    ///
    /// # Errors
    /// Returns the offending entry when an `--mdc` value has no `=`.
    pub fn to_record(&self) -> Result<LogRecord, String> {
        let mut record = LogRecord::new(&self.logger, self.level, self.message.join(" "));
        if let Some(thread) = &self.thread {
            record = record.thread(thread);
        }
        for entry in &self.mdc {
            let (key, value) = parse_mdc(entry)?;
            record = record.mdc(key, value);
        }
        Ok(record)
    }
}

/// Splits a `key=value` pair.
///
/// # Errors
/// Returns a message naming the entry when it has no `=` or an empty key.
pub fn parse_mdc(entry: &str) -> Result<(&str, &str), String> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(format!("invalid MDC entry '{entry}', expected KEY=VALUE")),
    }
}

/// Record used by the shell when nothing has been customized.
#[must_use]
pub fn sample_record() -> LogRecord {
    LogRecord::new("org.example.app.Service", Level::Info, "Hello {}")
        .args(["world"])
        .mdc("user", "alice")
        .mdc("request", "42")
}
