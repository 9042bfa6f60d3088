//! Parsing of a single `%` directive.
//!
//! A directive reads `%[min][.max]word[(sub-pattern)][{param, 'quoted, param'}]`.
//! [`ConversionSpec`] holds what was read and is handed to the factory, which
//! consumes it to build exactly one unit.

use super::converter::CompiledPattern;
use super::scanner::{EndOfInput, Scanner};
use crate::Error;
use crate::fmt::LengthLimits;

/// Largest accepted magnitude for a min or max length.
pub const MAX_LENGTH: u32 = 65_535;

#[derive(Debug, Default)]
pub struct ConversionSpec {
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
    pub word: String,
    pub parameters: Vec<String>,
    pub subpattern: Option<CompiledPattern>,
    /// Character offset of the `%` that opened the directive.
    pub position: usize,
}

impl ConversionSpec {
    /// A spec for `word` with no lengths, parameters or sub-pattern.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Reads the length specifiers and the conversion word. The scanner must
    /// sit just past the `%` found at `position`.
    ///
    /// # Errors
    /// `UnterminatedDirective` if the input ends before a word was read,
    /// `UnknownConversionWord` (with an empty word) if something other than a
    /// letter follows the lengths, `InvalidParameter` for a length beyond
    /// [`MAX_LENGTH`].
    pub fn read_conversion(scanner: &mut Scanner<'_>, position: usize) -> Result<Self, Error> {
        let mut spec = Self {
            position,
            ..Self::default()
        };

        let min_length = scanner.read_integer();
        let max_length = if scanner.current() == Some('.') {
            spec.advance(scanner)?;
            scanner.read_integer()
        } else {
            None
        };
        spec.word = scanner.read_word();

        if spec.word.is_empty() {
            if !scanner.has_more_characters() {
                return Err(spec.unterminated(scanner));
            }
            return Err(Error::UnknownConversionWord {
                word: String::new(),
                position,
                pattern: scanner.source().to_string(),
            });
        }
        spec.min_length = spec.checked_length(min_length)?;
        spec.max_length = spec.checked_length(max_length)?;
        Ok(spec)
    }

    fn checked_length(&self, read: Option<Result<i32, String>>) -> Result<Option<i32>, Error> {
        match read {
            None => Ok(None),
            Some(Ok(length)) if length.unsigned_abs() <= MAX_LENGTH => Ok(Some(length)),
            Some(Ok(length)) => Err(self.length_out_of_range(length.to_string())),
            Some(Err(text)) => Err(self.length_out_of_range(text)),
        }
    }

    fn length_out_of_range(&self, text: String) -> Error {
        Error::invalid_parameter(
            &self.word,
            text,
            format!("length must be at most {MAX_LENGTH} characters"),
        )
    }

    /// Reads a `{...}` parameter list if one follows.
    ///
    /// # Errors
    /// `UnterminatedDirective` when the list or a quoted parameter is left open.
    pub fn read_parameters(&mut self, scanner: &mut Scanner<'_>) -> Result<(), Error> {
        if scanner.current() == Some('{') {
            self.advance(scanner)?;
            while self.read_single_parameter(scanner)? {}
        }
        Ok(())
    }

    /// Reads one parameter and its trailing separator. Returns whether another
    /// parameter follows.
    fn read_single_parameter(&mut self, scanner: &mut Scanner<'_>) -> Result<bool, Error> {
        scanner.skip_whitespace();
        if scanner.current() == Some('\'') {
            return self.read_quoted_parameter(scanner);
        }

        let parameter = scanner.read_until(&[',', '}']);
        self.parameters.push(parameter);
        Ok(self.advance(scanner)? == ',')
    }

    /// Quoted content is taken verbatim up to the next quote; there is no escape.
    fn read_quoted_parameter(&mut self, scanner: &mut Scanner<'_>) -> Result<bool, Error> {
        let quote = self.advance(scanner)?;
        let parameter = scanner.read_until(&[quote]);
        self.advance(scanner)?;
        self.parameters.push(parameter);
        scanner.skip_whitespace();
        Ok(self.advance(scanner)? == ',')
    }

    /// Consumes one character, turning end of input into an error naming this directive.
    ///
    /// # Errors
    /// `UnterminatedDirective` when the scanner is exhausted.
    pub fn advance(&self, scanner: &mut Scanner<'_>) -> Result<char, Error> {
        scanner
            .advance()
            .map_err(|EndOfInput { .. }| self.unterminated(scanner))
    }

    fn unterminated(&self, scanner: &Scanner<'_>) -> Error {
        Error::UnterminatedDirective {
            word: self.word.clone(),
            position: self.position,
            pattern: scanner.source().to_string(),
        }
    }

    #[must_use]
    pub const fn limits(&self) -> LengthLimits {
        LengthLimits::new(self.min_length, self.max_length)
    }

    #[must_use]
    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).map(String::as_str)
    }

    /// Parameter at `index` read as an integer, `None` when absent.
    ///
    /// # Errors
    /// `InvalidParameter` when the text is not a number.
    pub fn int_parameter(&self, index: usize) -> Result<Option<i32>, Error> {
        self.parameter(index)
            .map(|p| {
                p.trim().parse::<i32>().map_err(|e| {
                    Error::invalid_parameter(&self.word, p, format!("expected an integer: {e}"))
                })
            })
            .transpose()
    }

    /// Parameter at `index`, failing when it is missing.
    ///
    /// # Errors
    /// `InvalidParameter` naming the missing position.
    pub fn required_parameter(&self, index: usize) -> Result<&str, Error> {
        self.parameter(index).ok_or_else(|| {
            Error::invalid_parameter(
                &self.word,
                "",
                format!("expected at least {} parameter(s)", index + 1),
            )
        })
    }

    /// Hands the compiled sub-pattern to the unit being built.
    pub fn take_subpattern(&mut self) -> Option<CompiledPattern> {
        self.subpattern.take()
    }
}
