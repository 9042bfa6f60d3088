//! Words that read one field of the record, or a fixed value from the context.

use super::unit;
use crate::Error;
use crate::fmt::ConsoleFormatting;
use crate::fmt::abbrev::abbreviate;
use crate::pattern::converter::{Constant, Converter};
use crate::pattern::factory::ConversionFactory;
use crate::record::{CallerLocation, LogRecord};

pub fn register(factory: &mut ConversionFactory) {
    factory.register_fn("logger", |spec, _| {
        let max_length = match spec.int_parameter(0)? {
            Some(n) => Some(usize::try_from(n).map_err(|_| {
                Error::invalid_parameter(&spec.word, n.to_string(), "length must not be negative")
            })?),
            None => None,
        };
        unit(LoggerName { max_length })
    });
    factory.aliases_for("logger", &["c", "lo"]);

    factory.register_fn("level", |_, _| unit(LevelName));
    factory.register_fn("coloredLevel", |_, context| {
        unit(ColoredLevel {
            console: context.console,
        })
    });

    factory.register_fn("message", |_, _| unit(Message));
    factory.aliases_for("message", &["m", "msg"]);

    factory.register_fn("thread", |_, _| unit(Thread));
    factory.aliases_for("thread", &["t"]);

    factory.register_fn("marker", |_, _| unit(Marker));

    factory.register_fn("mdc", |spec, _| {
        unit(spec.parameter(0).map_or(Mdc::All, Mdc::lookup))
    });
    factory.aliases_for("mdc", &["X"]);

    for (word, field, alias) in [
        ("file", CallerField::File, "F"),
        ("line", CallerField::Line, "L"),
        ("class", CallerField::Class, "C"),
        ("method", CallerField::Method, "M"),
    ] {
        factory.register_fn(word, move |_, _| unit(Caller(field)));
        factory.alias(alias, word);
    }

    factory.register_fn("application", |_, context| {
        unit(Constant::new(context.application.clone()))
    });
    factory.register_fn("node", |_, context| unit(Constant::new(context.node.clone())));
    factory.register_fn("applicationNode", |_, context| {
        unit(Constant::new(format!("{}@{}", context.application, context.node)))
    });

    factory.register_fn("n", |_, _| unit(Constant::new("\n")));
    factory.aliases_for("n", &["newline"]);
}

/// `%logger`, optionally abbreviated.
#[derive(Debug)]
struct LoggerName {
    max_length: Option<usize>,
}

impl Converter for LoggerName {
    fn render(&self, record: &LogRecord) -> String {
        match self.max_length {
            Some(max) => abbreviate(&record.logger, max),
            None => record.logger.clone(),
        }
    }
}

#[derive(Debug)]
struct LevelName;

impl Converter for LevelName {
    fn render(&self, record: &LogRecord) -> String {
        record.level.as_str().to_string()
    }
}

#[derive(Debug)]
struct ColoredLevel {
    console: ConsoleFormatting,
}

impl Converter for ColoredLevel {
    fn render(&self, record: &LogRecord) -> String {
        self.console.highlight(record.level, record.level.as_str())
    }
}

#[derive(Debug)]
struct Message;

impl Converter for Message {
    fn render(&self, record: &LogRecord) -> String {
        record.formatted_message()
    }
}

#[derive(Debug)]
struct Thread;

impl Converter for Thread {
    fn render(&self, record: &LogRecord) -> String {
        record.thread.clone()
    }
}

#[derive(Debug)]
struct Marker;

impl Converter for Marker {
    fn render(&self, record: &LogRecord) -> String {
        record.marker.clone().unwrap_or_default()
    }
}

/// `%mdc` prints every pair, `%mdc{key}` or `%mdc{key:-fallback}` a single value.
#[derive(Debug)]
enum Mdc {
    All,
    Key { key: String, default: String },
}

impl Mdc {
    fn lookup(parameter: &str) -> Self {
        let (key, default) = parameter.split_once(":-").unwrap_or((parameter, ""));
        Self::Key {
            key: key.trim().to_string(),
            default: default.to_string(),
        }
    }
}

impl Converter for Mdc {
    fn render(&self, record: &LogRecord) -> String {
        match self {
            Self::All => record
                .mdc
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Key { key, default } => record
                .mdc_value(key)
                .map_or_else(|| default.clone(), ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CallerField {
    File,
    Line,
    Class,
    Method,
}

/// Call-site location; empty when the record carries none.
#[derive(Debug)]
struct Caller(CallerField);

impl Caller {
    fn extract(field: CallerField, caller: &CallerLocation) -> String {
        match field {
            CallerField::File => caller.file.clone(),
            CallerField::Line => caller.line.to_string(),
            CallerField::Class => caller.module.clone(),
            CallerField::Method => caller.function.clone().unwrap_or_default(),
        }
    }
}

impl Converter for Caller {
    fn render(&self, record: &LogRecord) -> String {
        record
            .caller
            .as_ref()
            .map(|caller| Self::extract(self.0, caller))
            .unwrap_or_default()
    }
}
