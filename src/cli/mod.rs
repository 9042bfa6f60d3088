//! CLI module for patternlog.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// patternlog - Compile and try out log line patterns.
#[derive(Parser)]
#[command(
    name = "patternlog",
    version,
    about = "Compile and try out log line patterns"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render one record with a pattern.
    Render {
        /// Pattern to compile
        pattern: String,
        /// Record level
        #[arg(short, long, value_enum, default_value = "info")]
        level: LogLevel,
        /// Logger name
        #[arg(long, default_value = "patternlog")]
        logger: String,
        /// Thread name
        #[arg(short, long)]
        thread: Option<String>,
        /// Contextual pair, repeatable
        #[arg(long, value_name = "KEY=VALUE")]
        mdc: Vec<String>,
        /// Read records as JSON lines from FILE ("-" for stdin)
        #[arg(long, value_name = "FILE")]
        json: Option<String>,
        /// Message text
        message: Vec<String>,
    },
    /// Compile a pattern and report the first error.
    Check {
        /// Pattern to compile
        pattern: String,
    },
    /// List conversion words and aliases.
    Words,
}

pub use commands::{cmd_check, cmd_render, cmd_words, parse_record};
pub use util::{RenderArgs, parse_mdc, sample_record};
