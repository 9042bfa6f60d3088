#![cfg(feature = "cli")]
//! Argument helpers behind the `patternlog` binary.

use patternlog::cli::{RenderArgs, parse_mdc, parse_record, sample_record};
use patternlog::{Error, Level, compile};

#[test]
fn parse_mdc_splits_on_first_equals() {
    assert_eq!(parse_mdc("user=alice"), Ok(("user", "alice")));
    assert_eq!(parse_mdc("query=a=b"), Ok(("query", "a=b")));
    assert_eq!(parse_mdc("empty="), Ok(("empty", "")));
    assert!(parse_mdc("novalue").is_err());
    assert!(parse_mdc("=x").is_err());
}

#[test]
fn render_args_build_a_record() {
    let args = RenderArgs {
        level: Level::Warn,
        logger: "cli.Test".to_string(),
        thread: Some("main".to_string()),
        mdc: vec!["user=alice".to_string()],
        message: vec!["hello".to_string(), "there".to_string()],
    };
    let record = args.to_record().unwrap();
    let pattern = compile("%level [%thread] %logger %mdc - %message").unwrap();
    assert_eq!(
        pattern.render(&record),
        "WARN [main] cli.Test user=alice - hello there"
    );
}

#[test]
fn render_args_reject_bad_mdc() {
    let args = RenderArgs {
        mdc: vec!["broken".to_string()],
        ..RenderArgs::default()
    };
    assert!(args.to_record().is_err());
}

#[test]
fn parse_record_reports_invalid_json() {
    assert!(matches!(parse_record("{"), Err(Error::InvalidRecord(_))));
    let record = parse_record(r#"{"level": "error", "message": "m"}"#).unwrap();
    assert_eq!(record.level, Level::Error);
}

#[test]
fn sample_record_renders() {
    let pattern = compile("%level %message %mdc").unwrap();
    assert_eq!(
        pattern.render(&sample_record()),
        "INFO Hello world request=42, user=alice"
    );
}
