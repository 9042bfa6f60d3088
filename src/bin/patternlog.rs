//! `patternlog` binary: bare invocation opens the pattern shell, subcommands
//! render, check or list for scripting.
//!
//! Usage:
//!   patternlog                                  Enter interactive shell
//!   patternlog render <pattern> [opts] [msg]    Render one record
//!   patternlog render <pattern> --json FILE     Render JSON-line records
//!   patternlog check <pattern>                  Compile and report errors
//!   patternlog words                            List conversion words

use clap::Parser;
use patternlog::cli::{Cli, Command, RenderArgs, cmd_check, cmd_render, cmd_words};
use patternlog::config::Config;
use patternlog::internal;
use patternlog::{FormatContext, PatternFormatter};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    let context = match FormatContext::from_config(&config) {
        Ok(context) => context,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };
    let factory = config.conversion_factory();

    let Some(command) = cli.command else {
        return match patternlog::shell::run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                internal::error("SHELL", &format!("Shell error: {e}"));
                ExitCode::FAILURE
            }
        };
    };

    match command {
        Command::Render {
            pattern,
            level,
            logger,
            thread,
            mdc,
            json,
            message,
        } => {
            let formatter = match PatternFormatter::with_factory(&pattern, Arc::new(factory), &context)
            {
                Ok(f) => f.include_error(config.formatter.include_error),
                Err(e) => {
                    internal::error("CLI", &e.to_string());
                    return ExitCode::FAILURE;
                }
            };
            let args = RenderArgs {
                level: level.into(),
                logger,
                thread,
                mdc,
                message,
            };
            cmd_render(&formatter, &args, json.as_deref())
        }
        Command::Check { pattern } => cmd_check(&pattern, &factory, &context),
        Command::Words => cmd_words(&factory),
    }
}
