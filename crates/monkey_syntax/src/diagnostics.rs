//! Parse diagnostics.
//!
//! Every syntax problem the parser records is a [`ParseError`]. Each variant carries the [`Span`] of the offending
//! token, a stable diagnostic code, and implements [`miette::Diagnostic`] so front ends can render source-annotated
//! reports.
//!
//! ## Notes
//! - The lexer never fails. Unrecognized characters become `ILLEGAL` tokens and are reported here, by the parser,
//!   as [`ParseError::IllegalCharacter`].
//! - `Display` output is the plain one-line message (e.g. `expected next token to be RPAREN, got EOF instead`).

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use monkey_core::lang::registry::TokenTag;

pub use crate::ast::Span;

/// A syntax error discovered while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was absent (missing identifier after `let`, missing `=`, missing `)`).
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenTag,
        found: TokenTag,
        span: Span,
    },

    /// The token cannot start an expression.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixRule { kind: TokenTag, span: Span },

    /// An `ILLEGAL` token reached expression position.
    #[error("illegal character '{literal}'")]
    IllegalCharacter { literal: String, span: Span },

    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("could not parse \"{literal}\" as integer")]
    InvalidInteger { literal: String, span: Span },

    /// Expression nesting went past the configured limit.
    #[error("expression nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize, span: Span },
}

impl ParseError {
    /// Source span of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::NoPrefixRule { span, .. }
            | ParseError::IllegalCharacter { span, .. }
            | ParseError::InvalidInteger { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }

    /// Stable diagnostic code.
    pub fn code_str(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "monkey::parse::unexpected_token",
            ParseError::NoPrefixRule { .. } => "monkey::parse::no_prefix_rule",
            ParseError::IllegalCharacter { .. } => "monkey::parse::illegal_character",
            ParseError::InvalidInteger { .. } => "monkey::parse::invalid_integer",
            ParseError::NestingTooDeep { .. } => "monkey::parse::nesting_too_deep",
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::UnexpectedToken { expected, .. } => format!("expected {expected} here"),
            ParseError::NoPrefixRule { kind, .. } => format!("{kind} cannot start an expression"),
            ParseError::IllegalCharacter { .. } => "not part of the language".to_string(),
            ParseError::InvalidInteger { .. } => "out of range for a 64-bit integer".to_string(),
            ParseError::NestingTooDeep { .. } => "nesting limit reached here".to_string(),
        }
    }

    fn help_text(&self) -> Option<&'static str> {
        match self {
            ParseError::InvalidInteger { .. } => Some("integers must lie between -9223372036854775808 and 9223372036854775807"),
            ParseError::NestingTooDeep { .. } => Some("split the expression with `let` bindings, or raise --max-depth"),
            _ => None,
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help_text().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.label()), self.span());
        Some(Box::new(std::iter::once(label)))
    }
}

/// Return the 1-based `(line, column)` of a byte offset in `source`.
///
/// Columns count characters, not bytes. Offsets past the end clamp to the end of the source.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col = source[line_start..]
        .char_indices()
        .take_while(|(i, _)| line_start + i < offset)
        .count()
        + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_reference_wording() {
        let err = ParseError::UnexpectedToken {
            expected: "RPAREN",
            found: "EOF",
            span: Span::new(4, 4),
        };
        assert_eq!(err.to_string(), "expected next token to be RPAREN, got EOF instead");

        let err = ParseError::NoPrefixRule {
            kind: "SEMICOLON",
            span: Span::new(0, 1),
        };
        assert_eq!(err.to_string(), "no prefix parse function for SEMICOLON found");

        let err = ParseError::InvalidInteger {
            literal: "99999999999999999999".to_string(),
            span: Span::new(0, 20),
        };
        assert_eq!(err.to_string(), "could not parse \"99999999999999999999\" as integer");
    }

    #[test]
    fn test_diagnostic_code_and_label_span() {
        let err = ParseError::IllegalCharacter {
            literal: "@".to_string(),
            span: Span::new(3, 4),
        };
        assert_eq!(err.to_string(), "illegal character '@'");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("monkey::parse::illegal_character")
        );

        let labels: Vec<LabeledSpan> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 3);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_line_col() {
        let source = "let x = 1;\nlet yé = @;";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 4), (1, 5));
        assert_eq!(line_col(source, 11), (2, 1));
        // `@` sits after a two-byte character
        let at = source.find('@').unwrap();
        assert_eq!(line_col(source, at), (2, 10));
        assert_eq!(line_col(source, 10_000), (2, 12));
    }
}
