//! `patternlog` - pattern compilation for log lines.
//!
//! Turns a pattern such as `%-20logger %date{HH:mm:ss} %message` into a
//! reusable render function that formats a [`LogRecord`] into one string.
//! Patterns are checked completely at compile time: an unknown word, an
//! unterminated directive or a bad parameter fails there, never while
//! rendering.
//!
//! # Example
//!
//! ```
//! use patternlog::{Level, LogRecord};
//!
//! let pattern = patternlog::compile("%-6level|%logger{10}|%message").unwrap();
//! let record = LogRecord::new("org.example.Billing", Level::Warn, "retry {} of {}")
//!     .args([2, 5]);
//!
//! assert_eq!(pattern.render(&record), "WARN  |o.e.Billing|retry 2 of 5");
//! ```
//!
//! New words are registered on a [`ConversionFactory`]; see
//! [`ConversionFactory::register_fn`].
//!
//! # Features
//!
//! - `cli` (default): the `patternlog` binary and its interactive shell

pub mod config;
mod error;
pub mod fmt;
pub mod formatter;
pub mod internal;
pub mod level;
pub mod pattern;
pub mod record;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub mod shell;

pub use config::Config;
pub use error::Error;
pub use fmt::{AnsiColor, ColorMode, ConsoleFormatting, Emphasis, LengthLimits, TimeZoneSpec};
pub use formatter::PatternFormatter;
pub use level::Level;
pub use pattern::{
    CompiledPattern, ConversionFactory, ConversionSpec, Converter, ConverterBuilder, FormatContext,
    PatternReader, compile, compile_with,
};
pub use record::{CallerLocation, ErrorDetails, LogRecord};
