//! Monkey language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators and punctuation.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings, token-kind tags and
//! metadata via `const` registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, docs,
//!   precedence climbing).
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
