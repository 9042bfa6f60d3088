//! The structured record a compiled pattern renders.
//!
//! Every field a conversion word can read lives here, so a pattern never needs
//! to reach back into the logging framework that produced the record.

use crate::fmt::message;
use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::panic::Location;

/// One log event.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogRecord {
    /// Originating component, usually a dotted path such as `org.example.Billing`.
    pub logger: String,
    pub level: Level,
    pub timestamp: DateTime<Utc>,
    /// Message template; each `{}` is replaced by the next entry of `args`.
    pub message: String,
    pub args: Vec<String>,
    pub thread: String,
    pub marker: Option<String>,
    /// Contextual key-value pairs (MDC), iterated in key order.
    pub mdc: BTreeMap<String, String>,
    pub caller: Option<CallerLocation>,
    pub error: Option<ErrorDetails>,
}

impl Default for LogRecord {
    fn default() -> Self {
        Self {
            logger: String::new(),
            level: Level::default(),
            timestamp: Utc::now(),
            message: String::new(),
            args: Vec::new(),
            thread: current_thread_name(),
            marker: None,
            mdc: BTreeMap::new(),
            caller: None,
            error: None,
        }
    }
}

impl LogRecord {
    /// A record stamped with the current time and thread.
    #[must_use]
    pub fn new(logger: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Replaces the message arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.args = args.into_iter().map(|a| a.to_string()).collect();
        self
    }

    #[must_use]
    pub fn thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Adds one contextual pair; a repeated key overwrites the earlier value.
    #[must_use]
    pub fn mdc(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.mdc.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn caller(mut self, caller: CallerLocation) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attaches an error and its `source()` chain.
    #[must_use]
    pub fn error(mut self, error: &(dyn std::error::Error + 'static)) -> Self {
        self.error = Some(ErrorDetails::from_error(error));
        self
    }

    /// Message with every `{}` placeholder filled in.
    #[must_use]
    pub fn formatted_message(&self) -> String {
        message::format(&self.message, &self.args)
    }

    /// Value of a contextual key, if present.
    #[must_use]
    pub fn mdc_value(&self, key: &str) -> Option<&str> {
        self.mdc.get(key).map(String::as_str)
    }
}

fn current_thread_name() -> String {
    let current = std::thread::current();
    current.name().map_or_else(
        || format!("{:?}", current.id()),
        ToString::to_string,
    )
}

/// Where the logging call was made.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallerLocation {
    /// Module path (`%class`).
    pub module: String,
    pub file: String,
    pub line: u32,
    /// Enclosing function (`%method`), when the caller knows it.
    #[serde(default)]
    pub function: Option<String>,
}

impl CallerLocation {
    #[must_use]
    pub fn new(module: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            module: module.into(),
            file: file.into(),
            line,
            function: None,
        }
    }

    /// Location of the code calling this function. The module path is not known
    /// to `Location`, so it is left empty.
    #[must_use]
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self::new("", location.file(), location.line())
    }

    #[must_use]
    pub fn function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

/// Error attached to a record, flattened so it can be cloned and rendered later.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetails {
    pub message: String,
    /// Display text of each `source()` in order, outermost first.
    pub causes: Vec<String>,
}

impl ErrorDetails {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
        }
    }

    #[must_use]
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self {
            message: error.to_string(),
            causes,
        }
    }

    #[must_use]
    pub fn cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }
}
