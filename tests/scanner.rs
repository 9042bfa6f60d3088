//! The character cursor shared by the reader and the directive parser.

use patternlog::pattern::{EndOfInput, Scanner};

#[test]
fn advance_walks_characters_then_fails() {
    let mut scanner = Scanner::new("ab");
    assert_eq!(scanner.current(), Some('a'));
    assert_eq!(scanner.advance(), Ok('a'));
    assert_eq!(scanner.advance(), Ok('b'));
    assert!(!scanner.has_more_characters());
    assert_eq!(scanner.current(), None);
    assert_eq!(scanner.advance(), Err(EndOfInput { position: 2 }));
}

#[test]
fn read_until_stops_before_terminator() {
    let mut scanner = Scanner::new("abc%def");
    assert_eq!(scanner.read_until(&['%', ')']), "abc");
    assert_eq!(scanner.current(), Some('%'));
    assert_eq!(scanner.position(), 3);
}

#[test]
fn read_until_runs_to_end_without_terminator() {
    let mut scanner = Scanner::new("plain");
    assert_eq!(scanner.read_until(&['%']), "plain");
    assert!(!scanner.has_more_characters());
}

#[test]
fn skip_whitespace() {
    let mut scanner = Scanner::new("  \tx ");
    scanner.skip_whitespace();
    assert_eq!(scanner.current(), Some('x'));
    scanner.skip_whitespace();
    assert_eq!(scanner.current(), Some('x'));
}

#[test]
fn read_integer_signed() {
    let mut scanner = Scanner::new("-20logger");
    assert_eq!(scanner.read_integer(), Some(Ok(-20)));
    assert_eq!(scanner.read_word(), "logger");
}

#[test]
fn read_integer_lone_minus_is_consumed() {
    let mut scanner = Scanner::new("-x");
    assert_eq!(scanner.read_integer(), None);
    assert_eq!(scanner.current(), Some('x'));
}

#[test]
fn read_integer_reports_overflow_text() {
    let mut scanner = Scanner::new("-99999999999999level");
    assert_eq!(
        scanner.read_integer(),
        Some(Err("-99999999999999".to_string()))
    );
    assert_eq!(scanner.read_word(), "level");
}

#[test]
fn read_word_stops_at_non_letter() {
    let mut scanner = Scanner::new("level(x)");
    assert_eq!(scanner.read_word(), "level");
    assert_eq!(scanner.current(), Some('('));
    assert_eq!(scanner.source(), "level(x)");
}

#[test]
fn positions_count_chars() {
    let mut scanner = Scanner::new("æø%");
    assert_eq!(scanner.read_until(&['%']), "æø");
    assert_eq!(scanner.position(), 2);
}
