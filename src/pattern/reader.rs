//! Pattern compiler: alternates literal runs and `%` directives.
//!
//! Sub-patterns recurse through [`PatternReader::compile_until`] with `)` as
//! the terminator. The same scanner is threaded through every level, so the
//! whole pattern is read in one left-to-right pass.

use super::converter::{CompiledPattern, Constant, Converter};
use super::factory::{ConversionFactory, FormatContext};
use super::scanner::Scanner;
use super::spec::ConversionSpec;
use crate::Error;

const DIRECTIVE: char = '%';
const SUBPATTERN_START: char = '(';
const SUBPATTERN_END: char = ')';

/// Compiles patterns against one factory and context.
#[derive(Debug, Clone, Copy)]
pub struct PatternReader<'a> {
    factory: &'a ConversionFactory,
    context: &'a FormatContext,
}

impl<'a> PatternReader<'a> {
    #[must_use]
    pub const fn new(factory: &'a ConversionFactory, context: &'a FormatContext) -> Self {
        Self { factory, context }
    }

    /// Compiles a complete pattern.
    ///
    /// # Errors
    /// `UnknownConversionWord`, `UnterminatedDirective` or `InvalidParameter`
    /// for the first malformed directive.
    pub fn read_pattern(&self, pattern: &str) -> Result<CompiledPattern, Error> {
        let mut scanner = Scanner::new(pattern);
        self.compile_until(&mut scanner, None)
    }

    /// Compiles until `terminator` (left unconsumed) or the end of input.
    ///
    /// # Errors
    /// Any error from a directive inside the range.
    pub fn compile_until(
        &self,
        scanner: &mut Scanner<'_>,
        terminator: Option<char>,
    ) -> Result<CompiledPattern, Error> {
        let mut units: Vec<Box<dyn Converter>> = Vec::new();
        let stops: Vec<char> = std::iter::once(DIRECTIVE).chain(terminator).collect();

        loop {
            let text = scanner.read_until(&stops);
            if !text.is_empty() {
                units.push(Box::new(Constant::new(text)));
            }
            match scanner.current() {
                Some(DIRECTIVE) => units.push(self.read_directive(scanner)?),
                _ => break,
            }
        }

        Ok(CompiledPattern::new(units))
    }

    fn read_directive(&self, scanner: &mut Scanner<'_>) -> Result<Box<dyn Converter>, Error> {
        let position = scanner.position();
        // Sits on the '%', cannot fail.
        let _ = scanner.advance();

        if scanner.current() == Some(DIRECTIVE) {
            let _ = scanner.advance();
            return Ok(Box::new(Constant::new("%")));
        }

        let mut spec = ConversionSpec::read_conversion(scanner, position)?;
        let builder = self.factory.resolve(&spec, scanner.source())?;

        if builder.accepts_subpattern() && scanner.current() == Some(SUBPATTERN_START) {
            spec.advance(scanner)?;
            let subpattern = self.compile_until(scanner, Some(SUBPATTERN_END))?;
            spec.advance(scanner)?;
            spec.subpattern = Some(subpattern);
        }

        spec.read_parameters(scanner)?;
        ConversionFactory::instantiate(builder, spec, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::ConsoleFormatting;
    use crate::level::Level;
    use crate::record::LogRecord;

    fn render(pattern: &str, record: &LogRecord) -> Result<String, Error> {
        let factory = ConversionFactory::new();
        let context = FormatContext::default().console(ConsoleFormatting::plain());
        let compiled = PatternReader::new(&factory, &context).read_pattern(pattern)?;
        Ok(compiled.render(record))
    }

    #[test]
    fn literal_only_pattern_is_one_unit() {
        let factory = ConversionFactory::new();
        let context = FormatContext::default();
        let compiled = PatternReader::new(&factory, &context)
            .read_pattern("no directives (here)")
            .unwrap();
        assert_eq!(compiled.len(), 1);
    }

    #[test]
    fn empty_pattern_has_no_units() {
        let factory = ConversionFactory::new();
        let context = FormatContext::default();
        let compiled = PatternReader::new(&factory, &context)
            .read_pattern("")
            .unwrap();
        assert!(compiled.is_empty());
    }

    #[test]
    fn closing_paren_at_top_level_is_literal() {
        let record = LogRecord::new("a.b", Level::Warn, "x");
        assert_eq!(render("%level)", &record).unwrap(), "WARN)");
    }

    #[test]
    fn double_percent_is_literal() {
        let record = LogRecord::new("a.b", Level::Info, "x");
        assert_eq!(render("100%% %level", &record).unwrap(), "100% INFO");
    }

    #[test]
    fn subpattern_is_not_read_for_plain_words() {
        let record = LogRecord::new("a.b", Level::Info, "x");
        assert_eq!(render("%level(%logger)", &record).unwrap(), "INFO(a.b)");
    }

    #[test]
    fn unclosed_subpattern_names_outer_word() {
        let record = LogRecord::new("a.b", Level::Info, "x");
        let err = render("[%red(%level", &record).unwrap_err();
        assert!(matches!(
            err,
            Error::UnterminatedDirective { ref word, position: 1, .. } if word == "red"
        ));
    }
}
