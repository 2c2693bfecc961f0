//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters and
//! separators.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::tag(PunctuationId::RParen), "RPAREN");
//! ```

use super::registry::{Since, Stability, TokenTag};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Parentheses and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub tag: TokenTag,
    pub category: PunctuationCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ",", "COMMA", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", "SEMICOLON", PunctuationCategory::Separator),
    // Delimiters
    info(PunctuationId::LParen, "(", "LPAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", "RPAREN", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", "LBRACE", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", "RBRACE", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the token-kind tag for a punctuation token.
pub fn tag(id: PunctuationId) -> TokenTag {
    info_for(id).tag
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, tag: TokenTag, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        tag,
        category,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
