//! Syntax frontend for the Monkey language: lexer, parser, AST, diagnostics.
//!
//! Source text flows one way through this crate: text → [`lexer::Token`]s → [`ast::Program`]. Nothing here performs
//! I/O, and nothing executes the tree.
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution, no evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `monkey_core::lang` registries.
//! - Parsing is not all-or-nothing. Callers get the best partial [`ast::Program`] together with every
//!   [`diagnostics::ParseError`] discovered, and must treat a non-empty error list as a failed parse.
//!
//! ## Examples
//! ```rust
//! use monkey_syntax::parser;
//!
//! let output = parser::parse("let x = 5; x + 10;");
//! assert!(!output.has_errors());
//! assert_eq!(output.program.statements.len(), 2);
//! assert_eq!(output.program.to_string(), "let x = 5;(x+10)");
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
