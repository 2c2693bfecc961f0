#![forbid(unsafe_code)]
//! Monkey programming language front end
//!
//! This crate provides the `monkey` command-line tool on top of the syntax frontend: tokenizing and parsing files,
//! rendering parse diagnostics, and an interactive read loop.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a clear
//!   explanation. The vocabulary registries are the only such place.

pub mod cli;
pub mod version;

pub use monkey_syntax::ast;
pub use monkey_syntax::diagnostics;
pub use monkey_syntax::lexer;
pub use monkey_syntax::parser;
