//! Formatter units and the composite render function built from them.

use crate::fmt::LengthLimits;
use crate::record::LogRecord;
use std::fmt;
use std::sync::Arc;

/// One compiled piece of a pattern.
///
/// Units are built once and rendered many times, possibly from several
/// threads at once, so they must not hold mutable state.
pub trait Converter: Send + Sync + fmt::Debug {
    fn render(&self, record: &LogRecord) -> String;
}

/// Literal text between directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant(String);

impl Constant {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl Converter for Constant {
    fn render(&self, _record: &LogRecord) -> String {
        self.0.clone()
    }
}

/// Runs a unit's output through the padding/truncation stage.
#[derive(Debug)]
pub struct Justified {
    inner: Box<dyn Converter>,
    limits: LengthLimits,
}

impl Justified {
    #[must_use]
    pub fn new(inner: Box<dyn Converter>, limits: LengthLimits) -> Self {
        Self { inner, limits }
    }
}

impl Converter for Justified {
    fn render(&self, record: &LogRecord) -> String {
        self.limits.apply(self.inner.render(record))
    }
}

/// The compiled form of a pattern: its units in order.
///
/// Cloning is cheap and clones share the units.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    units: Arc<[Box<dyn Converter>]>,
}

impl Default for CompiledPattern {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CompiledPattern {
    #[must_use]
    pub fn new(units: Vec<Box<dyn Converter>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Concatenated output of every unit for `record`.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let mut out = String::new();
        for unit in self.units.iter() {
            out.push_str(&unit.render(record));
        }
        out
    }

    /// Number of units; an empty pattern has none.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl Converter for CompiledPattern {
    fn render(&self, record: &LogRecord) -> String {
        Self::render(self, record)
    }
}
