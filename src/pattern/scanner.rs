//! Character cursor over a pattern string.
//!
//! The cursor only moves forward. The reader and the conversion-spec parser share one
//! scanner through `&mut`, which is what keeps compilation a single pass.

use std::fmt;

/// Raised by [`Scanner::advance`] when no characters are left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput {
    pub position: usize,
}

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected end of input at position {}", self.position)
    }
}

impl std::error::Error for EndOfInput {}

#[derive(Debug)]
pub struct Scanner<'a> {
    source: &'a str,
    chars: Vec<char>,
    position: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            position: 0,
        }
    }

    /// The complete pattern, for error messages.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Offset of the current character, in `char`s.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn has_more_characters(&self) -> bool {
        self.position < self.chars.len()
    }

    /// Character under the cursor, `None` once the input is exhausted.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the current character and moves past it.
    ///
    /// # Errors
    /// [`EndOfInput`] when called with no characters left.
    pub fn advance(&mut self) -> Result<char, EndOfInput> {
        let c = self.current().ok_or(EndOfInput {
            position: self.position,
        })?;
        self.position += 1;
        Ok(c)
    }

    /// Consumes everything up to, not including, the first terminator or the end of input.
    pub fn read_until(&mut self, terminators: &[char]) -> String {
        let start = self.position;
        while let Some(c) = self.current() {
            if terminators.contains(&c) {
                break;
            }
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.position += 1;
        }
    }

    /// Reads an optional `-` followed by decimal digits.
    ///
    /// Returns `None` when no digit follows; a lone `-` is still consumed.
    /// A number that does not fit `i32` comes back as `Err` with its text.
    pub fn read_integer(&mut self) -> Option<Result<i32, String>> {
        let start = self.position;
        if self.current() == Some('-') {
            self.position += 1;
        }
        let digits = self.position;
        while self.current().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position == digits {
            return None;
        }

        let text: String = self.chars[start..self.position].iter().collect();
        Some(text.parse().map_err(|_| text))
    }

    /// Consumes the longest run of alphabetic characters.
    pub fn read_word(&mut self) -> String {
        let start = self.position;
        while self.current().is_some_and(char::is_alphabetic) {
            self.position += 1;
        }
        self.chars[start..self.position].iter().collect()
    }
}
