//! Words that decorate the output of their sub-pattern: colors, emphasis,
//! level highlighting and `%replace`.

use crate::Error;
use crate::fmt::{AnsiColor, ConsoleFormatting, Emphasis};
use crate::pattern::converter::{CompiledPattern, Converter};
use crate::pattern::factory::{ConversionFactory, ConverterBuilder, FormatContext, Transform};
use crate::pattern::spec::ConversionSpec;
use crate::record::LogRecord;
use regex::Regex;
use std::sync::Arc;

pub fn register(factory: &mut ConversionFactory) {
    for color in AnsiColor::ALL {
        factory.register_transformer(color.name(), move |_, context| {
            let console = context.console;
            Ok(Arc::new(move |text: &str| console.color(text, color)) as Transform)
        });
        factory.register_transformer(color.bold_name(), move |_, context| {
            let console = context.console;
            Ok(Arc::new(move |text: &str| console.bold_color(text, color)) as Transform)
        });
    }

    for emphasis in [Emphasis::Bold, Emphasis::Italic, Emphasis::Underline] {
        factory.register_transformer(emphasis.name(), move |_, context| {
            let console = context.console;
            Ok(Arc::new(move |text: &str| console.ansi(text, None, Some(emphasis))) as Transform)
        });
    }

    factory.register("highlight", HighlightBuilder);

    factory.register_transformer("replace", |spec, _| {
        let pattern = spec.required_parameter(0)?;
        let replacement = spec.required_parameter(1)?.to_string();
        let regex = Regex::new(pattern)
            .map_err(|e| Error::invalid_parameter(&spec.word, pattern, e.to_string()))?;
        Ok(Arc::new(move |text: &str| {
            regex.replace_all(text, replacement.as_str()).into_owned()
        }) as Transform)
    });
}

struct HighlightBuilder;

impl ConverterBuilder for HighlightBuilder {
    fn build(
        &self,
        spec: &mut ConversionSpec,
        context: &FormatContext,
    ) -> Result<Box<dyn Converter>, Error> {
        Ok(Box::new(Highlight {
            subpattern: spec.take_subpattern().unwrap_or_default(),
            console: context.console,
        }))
    }

    fn accepts_subpattern(&self) -> bool {
        true
    }
}

/// Colors the sub-pattern by the record's level.
#[derive(Debug)]
struct Highlight {
    subpattern: CompiledPattern,
    console: ConsoleFormatting,
}

impl Converter for Highlight {
    fn render(&self, record: &LogRecord) -> String {
        self.console
            .highlight(record.level, &self.subpattern.render(record))
    }
}
