//! A compiled pattern packaged as a line formatter.
//!
//! The render function itself adds nothing around its output. `PatternFormatter`
//! terminates the line and appends the record's error chain, which is what an
//! output writing whole lines wants.

mod from_config;

use crate::Error;
use crate::pattern::{self, CompiledPattern, ConversionFactory, FormatContext};
use crate::record::LogRecord;
use std::sync::Arc;

/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    pattern: String,
    compiled: CompiledPattern,
    include_error: bool,
    factory: Arc<ConversionFactory>,
}

impl PatternFormatter {
    /// Compiles `pattern` with the built-in words and the default context.
    ///
    /// # Errors
    /// Any compile error for `pattern`.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::with_factory(pattern, ConversionFactory::global(), &FormatContext::default())
    }

    /// Compiles `pattern` against a custom word registry and context.
    ///
    /// # Errors
    /// Any compile error for `pattern`.
    pub fn with_factory(
        pattern: &str,
        factory: Arc<ConversionFactory>,
        context: &FormatContext,
    ) -> Result<Self, Error> {
        let compiled = pattern::compile_with(pattern, &factory, context)?;
        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
            include_error: true,
            factory,
        })
    }

    /// Whether [`format`](Self::format) appends the error chain.
    #[must_use]
    pub const fn include_error(mut self, include: bool) -> Self {
        self.include_error = include;
        self
    }

    /// The record rendered by the pattern, nothing appended.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        self.compiled.render(record)
    }

    /// One terminated line, followed by the error message and one
    /// `Caused by:` line per source when the record carries an error.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let mut out = self.compiled.render(record);
        out.push('\n');

        if self.include_error
            && let Some(error) = &record.error
        {
            out.push_str(&error.message);
            out.push('\n');
            for cause in &error.causes {
                out.push_str("Caused by: ");
                out.push_str(cause);
                out.push('\n');
            }
        }
        out
    }

    /// The source text this formatter was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub const fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    /// Words the formatter's registry understands, aliases excluded.
    #[must_use]
    pub fn conversion_words(&self) -> Vec<&str> {
        self.factory.conversion_words()
    }
}
