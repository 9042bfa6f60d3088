//! patternlog interactive shell: every line is compiled as a pattern and
//! rendered against an editable sample record.

use crate::cli::util::{parse_mdc, sample_record};
use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::pattern::{self, ConversionFactory, FormatContext};
use crate::record::LogRecord;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use std::path::PathBuf;

const PROMPT: &str = "pattern> ";

/// State the shell commands act on.
struct Session {
    factory: ConversionFactory,
    context: FormatContext,
    record: LogRecord,
}

/// Runs the interactive shell.
///
/// # Errors
/// Returns error message if shell cannot be initialized.
pub fn run(config: &Config) -> Result<(), String> {
    internal::debug("SHELL", "Initializing shell...");
    let context = FormatContext::from_config(config).map_err(|e| e.to_string())?;
    let mut session = Session {
        factory: config.conversion_factory(),
        context,
        record: sample_record(),
    };

    let mut rl: Editor<(), DefaultHistory> =
        DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;

    let history_path = get_history_path();
    if let Some(path) = &history_path
        && rl.load_history(path).is_ok()
    {
        internal::debug("SHELL", "History loaded");
    }

    println!("patternlog shell - enter a pattern to render it, ':help' for commands");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                if !session.handle(&line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                internal::error("SHELL", &format!("Readline error: {e}"));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        if rl.save_history(path).is_err() {
            internal::warn("SHELL", "Could not save history");
        }
    }

    internal::info("SHELL", "Shell exited");
    Ok(())
}

impl Session {
    /// Returns `false` when the shell should exit.
    fn handle(&mut self, line: &str) -> bool {
        let Some(command) = line.trim_start().strip_prefix(':') else {
            self.render(line);
            return true;
        };

        let (name, argument) = command
            .split_once(char::is_whitespace)
            .map_or((command.trim(), ""), |(n, a)| (n, a.trim()));
        internal::trace("SHELL", &format!("Executing: :{name}"));

        match name {
            "quit" | "exit" | "q" => return false,
            "help" | "?" => print_help(),
            "words" => {
                println!("{}", self.factory.conversion_words().join(" "));
            }
            "level" => match argument.parse::<Level>() {
                Ok(level) => self.record.level = level,
                Err(e) => internal::error("SHELL", &e.to_string()),
            },
            "logger" => self.record.logger = argument.to_string(),
            "msg" => {
                self.record.message = argument.to_string();
                self.record.args.clear();
            }
            "mdc" => match parse_mdc(argument) {
                Ok((key, value)) => {
                    self.record.mdc.insert(key.to_string(), value.to_string());
                }
                Err(e) => internal::error("SHELL", &e),
            },
            "record" => println!("{:#?}", self.record),
            _ => {
                internal::error("SHELL", &format!("Unknown command: :{name}"));
                internal::info("SHELL", "Type ':help' for available commands");
            }
        }
        true
    }

    fn render(&self, pattern: &str) {
        match pattern::compile_with(pattern, &self.factory, &self.context) {
            Ok(compiled) => println!("{}", compiled.render(&self.record)),
            Err(e) => println!("error: {e}"),
        }
    }
}

fn print_help() {
    println!(
        "Enter any pattern, e.g. %-5level [%thread] %logger{{20}} - %message

Commands:
  :level <level>        Set the sample record's level
  :logger <name>        Set the sample record's logger name
  :msg <text>           Set the sample record's message
  :mdc <key=value>      Add a contextual pair
  :record               Show the sample record
  :words                List conversion words
  :help, :?             Show this help
  :quit, :exit, :q      Exit shell

Levels: trace, debug, info, warn, error"
    );
}

fn get_history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "patternlog")
        .map(|dirs| dirs.data_dir().join("shell_history"))
}
