//! `patternlog words`.

use crate::pattern::ConversionFactory;
use std::process::ExitCode;

/// Prints each word, followed by its aliases when it has any.
#[must_use]
pub fn cmd_words(factory: &ConversionFactory) -> ExitCode {
    for word in factory.conversion_words() {
        let aliases: Vec<&str> = factory
            .alias_pairs()
            .filter(|(_, target)| *target == word)
            .map(|(alias, _)| alias)
            .collect();
        if aliases.is_empty() {
            println!("{word}");
        } else {
            println!("{word} ({})", aliases.join(", "));
        }
    }
    ExitCode::SUCCESS
}
