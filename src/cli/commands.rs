//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::{NamedSource, Report};
use monkey_syntax::ast::Program;
use monkey_syntax::diagnostics::{self, ParseError};
use monkey_syntax::lexer::{self, Token};
use monkey_syntax::parser::{self, ParserConfig};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected before they are read.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting files over [`MAX_SOURCE_SIZE`].
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render parse errors as source-annotated reports, one after another.
pub fn format_parse_errors(file_path: &str, source: &str, errors: &[ParseError]) -> String {
    let mut msg = String::new();
    for err in errors {
        let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
        msg.push_str(&format!("{:?}\n", report));
    }
    msg
}

/// Parse `source`, turning any recorded error into a [`CliError`] carrying the rendered reports.
pub fn parse_source(file_path: &str, source: &str, config: ParserConfig) -> CliResult<Program> {
    parser::parse_with_config(source, config)
        .into_result()
        .map_err(|errs| {
            tracing::debug!(file = file_path, errors = errs.len(), "parse failed");
            CliError::failure(format_parse_errors(file_path, source, &errs).trim_end())
        })
}

/// One line of `--lex` output: `line:col Token { kind: TAG, literal: "..." }`.
pub fn format_token(source: &str, token: &Token) -> String {
    let (line, col) = diagnostics::line_col(source, token.span.start);
    format!("{}:{}\t{}", line, col, token)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in &lexer::lex(&source) {
        println!("{}", format_token(&source, tok));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &str, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parse_source(file_path, &source, config)?;
    println!("{:#?}", program);
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the canonical, fully parenthesized render.
pub fn render_file(file_path: &str, config: ParserConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parse_source(file_path, &source, config)?;
    println!("{}", program);
    Ok(ExitCode::SUCCESS)
}
