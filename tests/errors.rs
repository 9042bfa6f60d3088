//! Compile-time failures and their messages.

use patternlog::{Error, Level, LogRecord, compile};

#[test]
fn unknown_word_fails() {
    let err = compile("%nosuchconversion").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownConversionWord { ref word, position: 0, .. } if word == "nosuchconversion"
    ));
    assert_eq!(
        err.to_string(),
        "unknown conversion word '%nosuchconversion' at position 0 in \"%nosuchconversion\""
    );
    assert_eq!(err.conversion_word(), Some("nosuchconversion"));
}

#[test]
fn unknown_word_position_counts_chars() {
    let err = compile("héllo %nosuch").unwrap_err();
    assert!(matches!(err, Error::UnknownConversionWord { position: 6, .. }));
}

#[test]
fn unknown_word_inside_subpattern() {
    let err = compile("%red(%nosuch)").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownConversionWord { ref word, position: 5, .. } if word == "nosuch"
    ));
}

#[test]
fn missing_word_is_reported() {
    let err = compile("% x").unwrap_err();
    assert!(matches!(err, Error::UnknownConversionWord { ref word, .. } if word.is_empty()));
    assert!(err.to_string().starts_with("missing conversion word after '%' at position 0"));
}

#[test]
fn unterminated_parameter_list() {
    let err = compile("at: %date{HH:m").unwrap_err();
    assert!(matches!(
        err,
        Error::UnterminatedDirective { ref word, position: 4, .. } if word == "date"
    ));
    assert_eq!(
        err.to_string(),
        "end of pattern while reading '%date' at position 4 in \"at: %date{HH:m\""
    );
}

#[test]
fn unterminated_quoted_parameter() {
    let err = compile("%date{'HH:mm").unwrap_err();
    assert!(matches!(err, Error::UnterminatedDirective { ref word, .. } if word == "date"));
}

#[test]
fn unterminated_subpattern_names_outer_word() {
    let err = compile("%red(%level").unwrap_err();
    assert!(matches!(err, Error::UnterminatedDirective { ref word, .. } if word == "red"));
}

#[test]
fn unterminated_lengths() {
    for pattern in ["abc %", "abc %-", "abc %-8", "abc %-8.", "abc %.-20"] {
        let err = compile(pattern).unwrap_err();
        assert!(
            matches!(err, Error::UnterminatedDirective { position: 4, .. }),
            "{pattern}: {err}"
        );
    }
}

#[test]
fn every_prefix_compiles_or_fails_usefully() {
    let pattern = "level: [%red(%6level)] logger: (%.-20logger{132}) shortLogger: (%-8.10logger)";
    let record = LogRecord::new("some.logger.name", Level::Info, "message");

    for end in 0..pattern.len() {
        match compile(&pattern[..end]) {
            Ok(compiled) => {
                let _ = compiled.render(&record);
            }
            Err(Error::UnknownConversionWord { .. } | Error::UnterminatedDirective { .. }) => {}
            Err(other) => panic!("unexpected error for {:?}: {other}", &pattern[..end]),
        }
    }
}

#[test]
fn bad_date_format_names_word_and_parameter() {
    let err = compile("%date{foobar}").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("date"), "{message}");
    assert!(message.contains("foobar"), "{message}");
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[test]
fn bad_zone_is_invalid_parameter() {
    let err = compile("%date{HH:mm, Mars/Olympus_Mons}").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidParameter { ref word, ref parameter, .. }
            if word == "date" && parameter == "Mars/Olympus_Mons"
    ));
}

#[test]
fn alias_errors_name_the_alias() {
    let err = compile("%d{foobar}").unwrap_err();
    assert_eq!(err.conversion_word(), Some("d"));
}

#[test]
fn oversized_lengths_are_rejected() {
    for (pattern, expected_word, expected_parameter) in [
        ("%99999999999level", "level", "99999999999"),
        ("%-70000level", "level", "-70000"),
        ("%.2147483648logger", "logger", "2147483648"),
    ] {
        let err = compile(pattern).unwrap_err();
        assert!(
            matches!(
                err,
                Error::InvalidParameter { ref word, ref parameter, .. }
                    if word == expected_word && parameter == expected_parameter
            ),
            "{pattern}: {err}"
        );
    }
}

#[test]
fn largest_length_is_accepted() {
    let compiled = compile(&format!("%-{}level|", patternlog::pattern::MAX_LENGTH)).unwrap();
    let record = LogRecord::new("a", Level::Info, "");
    assert_eq!(compiled.render(&record).len(), 65_536);
}
