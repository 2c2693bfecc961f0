//! CLI module for the Monkey front end
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `monkey <file>` - Parse a file and print its canonical render
//! - `monkey --lex <file>` - Print the token stream
//! - `monkey --parse <file>` - Print the AST (debug form)
//! - `monkey repl [--mode tokens|ast]` - Interactive read loop (also the default with no arguments)
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `repl` - Read loop
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod repl;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use monkey_syntax::parser::ParserConfig;

use crate::version::MONKEY_VERSION;
use repl::ReplMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexer and parser for the Monkey programming language
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(version = MONKEY_VERSION)]
#[command(about = "Lexer and parser for the Monkey programming language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only and print the AST (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,

    /// Maximum expression nesting depth
    #[arg(long = "max-depth", value_name = "N", default_value_t = ParserConfig::DEFAULT_MAX_DEPTH, global = true)]
    pub max_depth: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive read loop
    Repl {
        /// What to print for each line
        #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
        mode: ReplMode,
    },
}

impl Cli {
    /// Parser settings selected on the command line.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::default().with_max_depth(self.max_depth)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.parser_config();
    tracing::debug!(max_depth = config.max_depth, "parser configured");

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(&file.to_string_lossy(), config);
    }

    match cli.command {
        Some(Command::Repl { mode }) => repl::run_stdio(mode, config),
        None => {
            // Default: render the file if provided, otherwise start the read loop
            if let Some(file) = &cli.file {
                commands::render_file(&file.to_string_lossy(), config)
            } else {
                repl::run_stdio(ReplMode::Tokens, config)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
