//! Pattern compilation: `%-20logger %date{HH:mm:ss} %message` into a render function.
//!
//! ```
//! use patternlog::{Level, LogRecord};
//!
//! let pattern = patternlog::compile("[%5level] %logger - %message").unwrap();
//! let record = LogRecord::new("billing.Invoice", Level::Info, "sent {}").args(["#42"]);
//! assert_eq!(pattern.render(&record), "[ INFO] billing.Invoice - sent #42");
//! ```

mod converter;
mod factory;
mod reader;
mod scanner;
mod spec;
mod words;

pub use converter::{CompiledPattern, Constant, Converter, Justified};
pub use factory::{ConversionFactory, ConverterBuilder, FormatContext, Transform, Transformed};
pub use reader::PatternReader;
pub use scanner::{EndOfInput, Scanner};
pub use spec::{ConversionSpec, MAX_LENGTH};

use crate::Error;

/// Compiles `pattern` with the built-in words and the default context.
///
/// # Errors
/// `UnknownConversionWord`, `UnterminatedDirective` or `InvalidParameter`.
pub fn compile(pattern: &str) -> Result<CompiledPattern, Error> {
    compile_with(pattern, &ConversionFactory::global(), &FormatContext::default())
}

/// Compiles `pattern` against a specific factory and context.
///
/// # Errors
/// `UnknownConversionWord`, `UnterminatedDirective` or `InvalidParameter`.
pub fn compile_with(
    pattern: &str,
    factory: &ConversionFactory,
    context: &FormatContext,
) -> Result<CompiledPattern, Error> {
    PatternReader::new(factory, context).read_pattern(pattern)
}
