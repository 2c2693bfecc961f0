//! Pratt parser for the Monkey language.
//!
//! Pulls tokens from a [`Lexer`] on demand (current token plus one token of peek) and builds a [`Program`]. Infix
//! binding powers come from the `monkey_core` operator registry.
//!
//! ## Examples
//!
//! ```rust
//! use monkey_syntax::parser;
//!
//! let output = parser::parse("a + b * c + d / e - f");
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.to_string(), "(((a+(b*c))+(d/e))-f)");
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use monkey_core::lang::keywords::KeywordId;
use monkey_core::lang::operators::{self, Associativity, OperatorId, Precedence};
use monkey_core::lang::punctuation::PunctuationId;

// The chunks below share one module so every `Parser` method stays private to it.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
