//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use monkey_core::lang::keywords::{self, KeywordId};
use monkey_core::lang::operators::{self, OperatorId};
use monkey_core::lang::punctuation::{self, PunctuationId};
use monkey_core::lang::registry::TokenTag;

impl TokenKind {
    /// Stable token-kind name used in diagnostics (`IDENT`, `ASSIGN`, `NOT_EQ`, `EOF`, ...).
    pub fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Keyword(id) => keywords::tag(*id),
            TokenKind::Operator(id) => operators::tag(*id),
            TokenKind::Punctuation(id) => punctuation::tag(*id),
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }

    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if this token starts a `let` or `return` statement.
    pub fn starts_statement(&self) -> bool {
        self.is_keyword(KeywordId::Let) || self.is_keyword(KeywordId::Return)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.tag()`.
    pub fn tag(&self) -> TokenTag {
        self.kind.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_follow_registries() {
        assert_eq!(TokenKind::Keyword(KeywordId::Return).tag(), "RETURN");
        assert_eq!(TokenKind::Operator(OperatorId::NotEq).tag(), "NOT_EQ");
        assert_eq!(TokenKind::Punctuation(PunctuationId::LBrace).tag(), "LBRACE");
        assert_eq!(TokenKind::Ident.tag(), "IDENT");
        assert_eq!(TokenKind::Eof.tag(), "EOF");
    }

    #[test]
    fn test_is_punctuation() {
        let semi = TokenKind::Punctuation(PunctuationId::Semicolon);
        assert!(semi.is_punctuation(PunctuationId::Semicolon));
        assert!(!semi.is_punctuation(PunctuationId::Comma));
        assert!(!TokenKind::Eof.is_punctuation(PunctuationId::Semicolon));
    }

    #[test]
    fn test_statement_starters() {
        assert!(TokenKind::Keyword(KeywordId::Let).starts_statement());
        assert!(TokenKind::Keyword(KeywordId::Return).starts_statement());
        assert!(!TokenKind::Keyword(KeywordId::True).starts_statement());
        assert!(!TokenKind::Ident.starts_statement());
    }
}
