//! `%date` and `%time` formats and zones.

use chrono::{FixedOffset, TimeZone, Utc};
use patternlog::fmt::{DatePattern, TimeZoneSpec};
use patternlog::{ConversionFactory, FormatContext, Level, LogRecord, compile_with};

fn event() -> LogRecord {
    LogRecord::new("some.logger.name", Level::Info, "A message")
        .timestamp(Utc.timestamp_millis_opt(1_535_056_492_088).unwrap())
}

fn render(pattern: &str) -> String {
    let context = FormatContext::default().timezone(TimeZoneSpec::utc());
    compile_with(pattern, &ConversionFactory::new(), &context)
        .unwrap()
        .render(&event())
}

#[test]
fn default_date_format() {
    assert_eq!(render("%date"), "2018-08-23 20:34:52.088");
    assert_eq!(render("%d"), "2018-08-23 20:34:52.088");
}

#[test]
fn default_time_format() {
    assert_eq!(render("%time"), "20:34:52.088");
}

#[test]
fn explicit_zone_parameter() {
    assert_eq!(render("%date{HH:mm, +02:00}"), "22:34");
    assert_eq!(render("%date{HH:mm, UTC-0530}"), "15:04");
    assert_eq!(render("%time{, GMT}"), "20:34:52.088");
}

#[test]
fn named_zone_parameter() {
    assert_eq!(render("%date{HH:mm, Europe/Oslo}"), "22:34");
    assert_eq!(
        render("%date{ 'HH:mm:ss,SSS', Europe/Oslo}"),
        "22:34:52,088"
    );
    assert_eq!(render("%time{HH:mm, America/New_York}"), "16:34");
}

#[test]
fn named_zone_follows_daylight_saving() {
    let winter = LogRecord::new("a", Level::Info, "")
        .timestamp(Utc.with_ymd_and_hms(2018, 1, 15, 12, 0, 0).unwrap());
    let context = FormatContext::default().timezone(TimeZoneSpec::parse("Europe/Oslo").unwrap());
    let compiled = compile_with("%date{HH:mm XXX}", &ConversionFactory::new(), &context).unwrap();
    assert_eq!(compiled.render(&winter), "13:00 +01:00");
    assert_eq!(compiled.render(&event()), "22:34 +02:00");
}

#[test]
fn empty_format_falls_back_to_default() {
    assert_eq!(render("%date{,UTC}"), "2018-08-23 20:34:52.088");
}

#[test]
fn context_zone_applies_without_parameter() {
    let context = FormatContext::default()
        .timezone(TimeZoneSpec::Fixed(FixedOffset::east_opt(3600).unwrap()));
    let compiled = compile_with("%date{HH:mm}", &ConversionFactory::new(), &context).unwrap();
    assert_eq!(compiled.render(&event()), "21:34");
}

#[test]
fn quoted_literals_and_offsets() {
    assert_eq!(
        render("%date{yyyy-MM-dd'T'HH:mm:ssXXX}"),
        "2018-08-23T20:34:52+00:00"
    );
    assert_eq!(render("%date{'EEE MMM d'}"), "Thu Aug 23");
    assert_eq!(render("%date{h 'o''clock' a}"), "8 o'clock PM");
}

#[test]
fn fraction_digits() {
    assert_eq!(render("%date{s.S}"), "52.0");
    assert_eq!(render("%date{ss.SSSSSS}"), "52.088000");
}

#[test]
fn date_pattern_rejects_unknown_letters() {
    let err = DatePattern::parse("foobar").unwrap_err();
    assert!(err.contains("'f'"));
    assert!(DatePattern::parse("HH:mm 'open").is_err());
}

#[test]
fn zone_parsing() {
    assert_eq!(TimeZoneSpec::parse("local").unwrap(), TimeZoneSpec::Local);
    assert_eq!(TimeZoneSpec::parse("Z").unwrap(), TimeZoneSpec::utc());
    assert_eq!(
        TimeZoneSpec::parse("+0530").unwrap(),
        TimeZoneSpec::Fixed(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
    );
    assert_eq!(
        TimeZoneSpec::parse("-2").unwrap(),
        TimeZoneSpec::Fixed(FixedOffset::west_opt(2 * 3600).unwrap())
    );
    assert_eq!(
        TimeZoneSpec::parse("Europe/Oslo").unwrap(),
        TimeZoneSpec::Named(chrono_tz::Europe::Oslo)
    );
    assert!(TimeZoneSpec::parse("Mars/Olympus_Mons").is_err());
    assert!(TimeZoneSpec::parse("+25:00").is_err());
    assert!(TimeZoneSpec::parse("+é").is_err());
}
