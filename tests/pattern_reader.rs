//! Compiling patterns and rendering records: literal text, lengths and nesting.

use chrono::{TimeZone, Utc};
use patternlog::fmt::ConsoleFormatting;
use patternlog::{
    CompiledPattern, ConversionFactory, Error, FormatContext, Level, LogRecord, compile,
    compile_with,
};

fn event() -> LogRecord {
    LogRecord::new("some.logger.name", Level::Info, "A message from {} to {}")
        .args(["A", "B"])
        .timestamp(Utc.timestamp_millis_opt(1_535_056_492_088).unwrap())
        .thread("main")
}

fn plain(pattern: &str) -> Result<CompiledPattern, Error> {
    let context = FormatContext::default().console(ConsoleFormatting::plain());
    compile_with(pattern, &ConversionFactory::new(), &context)
}

fn render(pattern: &str) -> String {
    plain(pattern).unwrap().render(&event())
}

#[test]
fn outputs_literal_pattern() {
    assert_eq!(render("ABC"), "ABC");
}

#[test]
fn literal_with_parentheses_and_braces_is_verbatim() {
    for pattern in ["a (b) {c}", "plain, text.", ")(", "}{"] {
        assert_eq!(render(pattern), pattern);
    }
}

#[test]
fn empty_pattern_renders_empty_string() {
    let compiled = plain("").unwrap();
    assert!(compiled.is_empty());
    assert_eq!(compiled.render(&event()), "");
}

#[test]
fn outputs_logger() {
    assert_eq!(render("%logger"), "some.logger.name");
}

#[test]
fn outputs_level() {
    assert_eq!(render("%level"), "INFO");
}

#[test]
fn pads_right_justified() {
    assert_eq!(render("%6level"), "  INFO");
}

#[test]
fn pads_left_justified() {
    assert_eq!(render("%-20logger"), "some.logger.name    ");
}

#[test]
fn truncates_then_pads() {
    assert_eq!(render("%-8.10logger"), "some.logge");
}

#[test]
fn negative_max_keeps_rightmost() {
    assert_eq!(render("%.-4logger"), "name");
    assert_eq!(render("%.-20logger{132}"), "some.logger.name");
}

#[test]
fn combined_lengths_in_one_line() {
    assert_eq!(
        render("level: [%6level] logger: (%-20logger) shortLogger: (%-8.10logger)"),
        "level: [  INFO] logger: (some.logger.name    ) shortLogger: (some.logge)"
    );
}

#[test]
fn padding_applies_to_subpattern_output() {
    assert_eq!(render("[%-10bold(%level)]"), "[INFO      ]");
    assert_eq!(render("[%.2red(%level)]"), "[IN]");
}

#[test]
fn formats_message_with_arguments() {
    assert_eq!(render("%message"), "A message from A to B");
    assert_eq!(render("%m|%msg"), "A message from A to B|A message from A to B");
}

#[test]
fn double_percent_renders_percent() {
    assert_eq!(render("100%% %level"), "100% INFO");
}

#[test]
fn nested_subpatterns_compile_recursively() {
    assert_eq!(
        render("%bold(<%red(%cyan([%level]) %logger)>)"),
        "<[INFO] some.logger.name>"
    );
}

#[test]
fn quoted_parameter_keeps_commas() {
    assert_eq!(render("%date{'HH:mm:ss,SSS', UTC}"), "20:34:52,088");
}

#[test]
fn unquoted_parameters_split_on_commas() {
    assert_eq!(render("%date{HH:mm:ss, UTC}"), "20:34:52");
}

#[test]
fn parenthesis_after_plain_word_is_literal() {
    assert_eq!(render("%level(%logger)"), "INFO(some.logger.name)");
}

#[test]
fn compiling_twice_renders_identically() {
    let pattern = "%-5level [%thread] %logger{10} - %message";
    let record = event();
    assert_eq!(
        plain(pattern).unwrap().render(&record),
        plain(pattern).unwrap().render(&record)
    );
}

#[test]
fn default_compile_uses_builtin_words() {
    let compiled = compile("%level %logger").unwrap();
    assert_eq!(compiled.render(&event()), "INFO some.logger.name");
}

#[test]
fn compiled_pattern_is_shared_across_threads() {
    let compiled = plain("%-5level %logger - %message").unwrap();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let compiled = compiled.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(
                        compiled.render(&event()),
                        "INFO  some.logger.name - A message from A to B"
                    );
                }
            });
        }
    });
}
