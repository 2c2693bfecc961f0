//! Canonical language vocabulary for the Monkey frontend.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that both the lexer and the parser
//! consult for spellings, token-kind tags and operator precedence, so that no caller has to match on raw strings.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, and no AST types.
//! - Syntax rules still live in `monkey_syntax`; this crate only describes the words and symbols of the language.

pub mod lang;
