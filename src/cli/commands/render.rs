//! `patternlog render <pattern>`: one record from flags, or one per JSON line.

use crate::Error;
use crate::cli::util::RenderArgs;
use crate::formatter::PatternFormatter;
use crate::internal;
use crate::record::LogRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process::ExitCode;

/// Prints `formatter.format(record)` for the record built from `args`, or
/// for every line of `json` when given.
#[must_use]
pub fn cmd_render(formatter: &PatternFormatter, args: &RenderArgs, json: Option<&str>) -> ExitCode {
    match json {
        Some(source) => render_json(formatter, source),
        None => match args.to_record() {
            Ok(record) => {
                print!("{}", formatter.format(&record));
                ExitCode::SUCCESS
            }
            Err(e) => {
                internal::error("RENDER", &e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Decodes one JSON object into a record. Missing fields take their defaults.
///
/// # Errors
/// `InvalidRecord` when the line is not a valid record.
pub fn parse_record(line: &str) -> Result<LogRecord, Error> {
    Ok(serde_json::from_str(line)?)
}

fn render_json(formatter: &PatternFormatter, source: &str) -> ExitCode {
    let reader: Box<dyn BufRead> = if source == "-" {
        internal::debug("RENDER", "Reading records from stdin");
        Box::new(io::stdin().lock())
    } else {
        match File::open(source) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                internal::error("RENDER", &format!("Cannot open {source}: {e}"));
                return ExitCode::FAILURE;
            }
        }
    };

    let mut processed = 0u64;
    let mut failed = 0u64;
    for line in reader.lines() {
        match line {
            Ok(l) if l.trim().is_empty() => {}
            Ok(l) => match parse_record(&l) {
                Ok(record) => {
                    print!("{}", formatter.format(&record));
                    processed += 1;
                }
                Err(e) => {
                    internal::error("RENDER", &e.to_string());
                    failed += 1;
                }
            },
            Err(e) => {
                internal::error("RENDER", &format!("Error reading input: {e}"));
                return ExitCode::FAILURE;
            }
        }
    }

    internal::info(
        "RENDER",
        &format!("Rendered {processed} record(s), {failed} failed"),
    );
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
