//! Text helpers shared by the conversion words: decoration, justification,
//! date patterns, message placeholders and logger-name abbreviation.

pub mod abbrev;
mod color;
pub mod date;
mod justify;
pub mod message;

pub use color::{AnsiColor, ColorMode, ConsoleFormatting, Emphasis};
pub use date::{DatePattern, TimeZoneSpec};
pub use justify::LengthLimits;
