//! Unified error type for pattern compilation, configuration and record input.

use std::path::PathBuf;

/// Error type for patternlog operations.
///
/// The three pattern variants are compile-time failures. A pattern that
/// compiled successfully never fails while rendering.
#[derive(Debug)]
pub enum Error {
    /// A `%` directive named a word the factory has no builder for.
    UnknownConversionWord {
        word: String,
        /// Character offset of the directive's `%` sign.
        position: usize,
        pattern: String,
    },
    /// The pattern ended inside a directive (length, word, sub-pattern or parameter list).
    UnterminatedDirective {
        word: String,
        /// Character offset of the directive's `%` sign.
        position: usize,
        pattern: String,
    },
    /// A parameter could not be interpreted by the unit consuming it.
    InvalidParameter {
        word: String,
        parameter: String,
        reason: String,
    },
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// JSON record input could not be decoded.
    InvalidRecord(serde_json::Error),
}

impl Error {
    /// Conversion word the error is about, for pattern errors.
    #[must_use]
    pub fn conversion_word(&self) -> Option<&str> {
        match self {
            Self::UnknownConversionWord { word, .. }
            | Self::UnterminatedDirective { word, .. }
            | Self::InvalidParameter { word, .. } => Some(word),
            _ => None,
        }
    }

    pub(crate) fn invalid_parameter(
        word: &str,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            word: word.to_string(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownConversionWord {
                word,
                position,
                pattern,
            } if word.is_empty() => write!(
                f,
                "missing conversion word after '%' at position {position} in \"{pattern}\""
            ),
            Self::UnknownConversionWord {
                word,
                position,
                pattern,
            } => write!(
                f,
                "unknown conversion word '%{word}' at position {position} in \"{pattern}\""
            ),
            Self::UnterminatedDirective {
                word,
                position,
                pattern,
            } => write!(
                f,
                "end of pattern while reading '%{word}' at position {position} in \"{pattern}\""
            ),
            Self::InvalidParameter {
                word,
                parameter,
                reason,
            } => write!(f, "invalid parameter '{parameter}' for '%{word}': {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidRecord(e) => write!(f, "invalid record: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidRecord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidRecord(e)
    }
}
