//! Shareable metadata for `monkey_core::lang` registries.
//!
//! The `monkey_core::lang` module is a set of **registry-first** vocabularies: keywords, operators and punctuation.
//! This submodule provides the small, dependency-free metadata types that are reused across all of them.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the lexer/parser.

/// Stable token-kind tag, e.g. `"PLUS"` or `"LPAREN"`.
///
/// Tags are the names diagnostics use when they talk about a kind of token, so they must never change once
/// published.
pub type TokenTag = &'static str;

/// Language version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use monkey_core::lang::registry::Since;
///
/// let since = Since(0, 1);
/// assert_eq!(since.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}
