//! Interactive read loop.
//!
//! Reads source one line at a time and echoes either the line's tokens or its parsed tree. The loop is generic over
//! [`BufRead`] / [`Write`] so it runs the same against a terminal or in-memory buffers.

use std::env;
use std::io::{self, BufRead, Write};

use monkey_syntax::lexer::{Lexer, TokenKind};
use monkey_syntax::parser::{self, ParserConfig};
use thiserror::Error;

use super::{CliError, CliResult, ExitCode};

/// Prompt printed before every line.
pub const PROMPT: &str = ">> ";

/// What the loop prints for each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReplMode {
    /// Every token except `EOF`, one per line
    Tokens,
    /// Canonical render of the parsed line, or its parse errors
    Ast,
}

/// Errors that end the read loop.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl From<ReplError> for CliError {
    fn from(err: ReplError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Name of the current user from `USER` / `USERNAME`, if set and non-empty.
pub fn current_user() -> Option<String> {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|name| !name.is_empty())
}

/// Startup banner.
pub fn greeting(user: Option<&str>) -> String {
    let hello = match user {
        Some(name) => format!("Hello {name}! This is the Monkey programming language"),
        None => "Hello! This is the Monkey programming language".to_string(),
    };
    format!("{hello}\nFeel free to type in commands\n")
}

/// Run the loop until `input` is exhausted.
///
/// ## Errors
/// Returns a [`ReplError`] if reading or writing fails. Parse errors are printed, never returned.
pub fn start<R: BufRead, W: Write>(input: R, output: &mut W, mode: ReplMode, config: ParserConfig) -> Result<(), ReplError> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(ReplError::Read)?;

        match mode {
            ReplMode::Tokens => echo_tokens(&line, output)?,
            ReplMode::Ast => echo_tree(&line, output, config)?,
        }
    }
}

fn echo_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    for tok in Lexer::new(line).take_while(|t| t.kind != TokenKind::Eof) {
        writeln!(output, "{}", tok)?;
    }
    Ok(())
}

fn echo_tree<W: Write>(line: &str, output: &mut W, config: ParserConfig) -> io::Result<()> {
    let parsed = parser::parse_with_config(line, config);
    if parsed.has_errors() {
        for err in &parsed.errors {
            writeln!(output, "\t{}", err)?;
        }
    } else {
        writeln!(output, "{}", parsed.program)?;
    }
    Ok(())
}

/// Run the loop on the process's stdin/stdout with a greeting.
pub fn run_stdio(mode: ReplMode, config: ParserConfig) -> CliResult<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write!(stdout, "{}", greeting(current_user().as_deref())).map_err(ReplError::Write)?;
    start(stdin.lock(), &mut stdout, mode, config)?;
    writeln!(stdout).map_err(ReplError::Write)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(mode: ReplMode, input: &str) -> String {
        let mut out = Vec::new();
        start(input.as_bytes(), &mut out, mode, ParserConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tokens_mode_echoes_each_token() {
        let out = run(ReplMode::Tokens, "let x = 5;\n");
        assert_eq!(
            out,
            concat!(
                ">> Token { kind: LET, literal: \"let\" }\n",
                "Token { kind: IDENT, literal: \"x\" }\n",
                "Token { kind: ASSIGN, literal: \"=\" }\n",
                "Token { kind: INT, literal: \"5\" }\n",
                "Token { kind: SEMICOLON, literal: \";\" }\n",
                ">> ",
            )
        );
    }

    #[test]
    fn test_ast_mode_renders_or_lists_errors() {
        let out = run(ReplMode::Ast, "-a * b\n(1 + 2\n");
        assert_eq!(
            out,
            ">> ((-a)*b)\n>> \texpected next token to be RPAREN, got EOF instead\n>> "
        );
    }

    #[test]
    fn test_empty_input_prints_one_prompt() {
        assert_eq!(run(ReplMode::Ast, ""), ">> ");
    }

    #[test]
    fn test_greeting() {
        assert!(greeting(Some("ada")).starts_with("Hello ada! This is the Monkey programming language\n"));
        assert!(greeting(None).starts_with("Hello! "));
        assert!(greeting(None).ends_with("Feel free to type in commands\n"));
    }
}
