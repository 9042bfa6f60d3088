//! One file per subcommand, so each handler owns its validation and reporting.

mod check;
mod render;
mod words;

pub use check::cmd_check;
pub use render::{cmd_render, parse_record};
pub use words::cmd_words;
