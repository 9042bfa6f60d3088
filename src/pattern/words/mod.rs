//! Built-in conversion words.
//!
//! Each family registers its own builders, so adding a word never touches
//! another family's code.

mod date;
mod decor;
mod fields;

use super::converter::Converter;
use super::factory::ConversionFactory;
use crate::Error;

/// Registers every built-in word and alias.
pub fn register_defaults(factory: &mut ConversionFactory) {
    fields::register(factory);
    date::register(factory);
    decor::register(factory);
}

/// Boxes a unit as a builder result.
#[allow(clippy::unnecessary_wraps)]
fn unit(converter: impl Converter + 'static) -> Result<Box<dyn Converter>, Error> {
    Ok(Box::new(converter))
}
