//! Define the reserved keyword vocabulary for the Monkey language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, token-kind tags, categories and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact and **case-sensitive**: `Let` and `TRUE` are plain identifiers.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("return"), Some(KeywordId::Return));
//! assert_eq!(keywords::from_str("Return"), None);
//! assert_eq!(keywords::tag(KeywordId::True), "TRUE");
//! ```

use super::registry::{Since, Stability, TokenTag};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements
    Let,
    Return,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Binding,
    ControlFlow,
    Literal,
}

/// Usage context hints (not enforced here; the parser owns context).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordUsage {
    /// Starts a statement (`let`, `return`).
    Statement,
    /// Starts an expression (`true`, `false`).
    Expression,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the only accepted spelling; Monkey keywords have no aliases.
/// - `tag` is the token-kind name used in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub tag: TokenTag,
    pub category: KeywordCategory,
    pub usage: &'static [KeywordUsage],
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Let,
        "let",
        "LET",
        KeywordCategory::Binding,
        &[KeywordUsage::Statement],
        Since(0, 1),
    ),
    info(
        KeywordId::Return,
        "return",
        "RETURN",
        KeywordCategory::ControlFlow,
        &[KeywordUsage::Statement],
        Since(0, 1),
    ),
    info(
        KeywordId::True,
        "true",
        "TRUE",
        KeywordCategory::Literal,
        &[KeywordUsage::Expression],
        Since(0, 1),
    ),
    info(
        KeywordId::False,
        "false",
        "FALSE",
        KeywordCategory::Literal,
        &[KeywordUsage::Expression],
        Since(0, 1),
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The keyword's canonical spelling (e.g. `"let"`).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Token-kind tag (e.g. `"LET"`).
pub fn tag(id: KeywordId) -> TokenTag {
    info_for(id).tag
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Usage hints.
pub fn usage(id: KeywordId) -> &'static [KeywordUsage] {
    info_for(id).usage
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling exactly matches a reserved word.
/// - `None` otherwise (the spelling is an ordinary identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    tag: TokenTag,
    category: KeywordCategory,
    usage: &'static [KeywordUsage],
    since: Since,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        tag,
        category,
        usage,
        since,
        stability: Stability::Stable,
    }
}
