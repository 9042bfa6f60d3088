//! `patternlog check <pattern>`.

use crate::internal;
use crate::pattern::{self, ConversionFactory, FormatContext};
use std::process::ExitCode;

/// Compiles `pattern`, printing `ok` or the compile error.
#[must_use]
pub fn cmd_check(pattern: &str, factory: &ConversionFactory, context: &FormatContext) -> ExitCode {
    internal::debug("CHECK", &format!("Compiling: {pattern}"));
    match pattern::compile_with(pattern, factory, context) {
        Ok(compiled) => {
            internal::trace("CHECK", &format!("{} unit(s)", compiled.len()));
            println!("ok");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
