//! Lexer for the Monkey language.
//!
//! A single-pass scanner with one character of lookahead. Tokens are produced lazily: call
//! [`Lexer::next_token`] or drive the lexer as an [`Iterator`].
//!
//! Handles:
//! - Keywords (`let`, `return`, `true`, `false`) and identifiers (ASCII letters and `_`)
//! - Decimal integer literals (kept as text; conversion happens in the parser)
//! - One- and two-character operators (`=`, `==`, `!`, `!=`, ...)
//! - Punctuation (`,` `;` `(` `)` `{` `}`)
//!
//! ## Notes
//! - The lexer never fails. Any other character (including non-ASCII ones) becomes a single `ILLEGAL` token carrying
//!   that character; the parser decides whether it is an error.
//! - After the end of input, [`Lexer::next_token`] keeps returning `EOF`.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use monkey_core::lang::operators::OperatorId;
use monkey_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for Monkey source code.
///
/// Holds a cursor into the source plus the character under it. `None` marks the end of input.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of `ch`.
    pos: usize,
    ch: Option<char>,
    /// Set once the iterator has yielded `EOF`.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            ch: source.chars().next(),
            done: false,
        }
    }

    /// Restart scanning from the first character.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.ch = self.source.chars().next();
        self.done = false;
    }

    /// Scan and return the next token.
    ///
    /// Returns `EOF` (empty literal, zero-width span at the end of input) once the input is exhausted, and on every
    /// call after that.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let Some(c) = self.ch else {
            return Token::new(TokenKind::Eof, "", Span::new(start, start));
        };

        let kind = match c {
            // Two-character operators need one character of lookahead
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    TokenKind::Operator(OperatorId::EqEq)
                } else {
                    TokenKind::Operator(OperatorId::Assign)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    TokenKind::Operator(OperatorId::NotEq)
                } else {
                    TokenKind::Operator(OperatorId::Bang)
                }
            }

            // Single-character operators
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Asterisk),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '<' => TokenKind::Operator(OperatorId::Lt),
            '>' => TokenKind::Operator(OperatorId::Gt),

            // Punctuation
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),

            c if is_letter(c) => return self.read_identifier(),
            c if c.is_ascii_digit() => return self.read_number(),

            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.token_from(kind, start)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn read_char(&mut self) {
        if let Some(c) = self.ch {
            self.pos += c.len_utf8();
        }
        self.ch = self.source[self.pos..].chars().next();
    }

    fn peek_char(&self) -> Option<char> {
        let c = self.ch?;
        self.source[self.pos + c.len_utf8()..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.source[start..self.pos], Span::new(start, self.pos))
    }

    // ========================================================================
    // Multi-character tokens
    // ========================================================================

    fn read_identifier(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        let kind = match keyword_id(&self.source[start..self.pos]) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        self.token_from(kind, start)
    }

    fn read_number(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        self.token_from(TokenKind::Int, start)
    }
}

/// Yields every token up to and including a single `EOF`, then `None`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Tokenize an entire source string.
///
/// The returned stream always ends with exactly one `EOF` token. Tokenization never fails.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    tracing::trace!(token_count = tokens.len(), "lexed source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use monkey_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_next_token_covers_every_symbol() {
        let input = "=+(){},;";
        let expected = [
            (TokenKind::Operator(OperatorId::Assign), "="),
            (TokenKind::Operator(OperatorId::Plus), "+"),
            (TokenKind::Punctuation(PunctuationId::LParen), "("),
            (TokenKind::Punctuation(PunctuationId::RParen), ")"),
            (TokenKind::Punctuation(PunctuationId::LBrace), "{"),
            (TokenKind::Punctuation(PunctuationId::RBrace), "}"),
            (TokenKind::Punctuation(PunctuationId::Comma), ","),
            (TokenKind::Punctuation(PunctuationId::Semicolon), ";"),
            (TokenKind::Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, (kind, literal)) in expected.iter().enumerate() {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, *kind, "tests[{i}] - wrong kind");
            assert_eq!(tok.literal, *literal, "tests[{i}] - wrong literal");
        }
    }

    #[test]
    fn test_program_tokens() {
        let input = "let five = 5;\nlet ten = 10;\n\n!-/*5;\n5 < 10 > 5;\n10 == 10; 10 != 9;\nreturn true; false";
        let tags: Vec<(&str, String)> = lex(input).into_iter().map(|t| (t.kind.tag(), t.literal)).collect();
        let expected: Vec<(&str, &str)> = vec![
            ("LET", "let"),
            ("IDENT", "five"),
            ("ASSIGN", "="),
            ("INT", "5"),
            ("SEMICOLON", ";"),
            ("LET", "let"),
            ("IDENT", "ten"),
            ("ASSIGN", "="),
            ("INT", "10"),
            ("SEMICOLON", ";"),
            ("BANG", "!"),
            ("MINUS", "-"),
            ("SLASH", "/"),
            ("ASTERISK", "*"),
            ("INT", "5"),
            ("SEMICOLON", ";"),
            ("INT", "5"),
            ("LT", "<"),
            ("INT", "10"),
            ("GT", ">"),
            ("INT", "5"),
            ("SEMICOLON", ";"),
            ("INT", "10"),
            ("EQ", "=="),
            ("INT", "10"),
            ("SEMICOLON", ";"),
            ("INT", "10"),
            ("NOT_EQ", "!="),
            ("INT", "9"),
            ("SEMICOLON", ";"),
            ("RETURN", "return"),
            ("TRUE", "true"),
            ("SEMICOLON", ";"),
            ("FALSE", "false"),
            ("EOF", ""),
        ];
        let actual: Vec<(&str, &str)> = tags.iter().map(|(t, l)| (*t, l.as_str())).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            kinds("let Let LET"),
            vec![
                TokenKind::Keyword(KeywordId::Let),
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifiers_allow_underscore_but_not_digits() {
        let tokens = lex("foo_bar x1");
        let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.literal.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                (TokenKind::Ident, "foo_bar"),
                (TokenKind::Ident, "x"),
                (TokenKind::Int, "1"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_illegal_characters_are_tokens_not_errors() {
        let tokens = lex("a @ é");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[2].kind, TokenKind::Illegal);
        assert_eq!(tokens[2].literal, "é");
        assert_eq!(tokens[2].span, Span::new(4, 6));
    }

    #[test]
    fn test_integer_literal_is_not_converted() {
        let tokens = lex("99999999999999999999999");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].literal, "99999999999999999999999");
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let tokens = lex("let x\t== 10;");
        let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(0, 3),
                Span::new(4, 5),
                Span::new(6, 8),
                Span::new(9, 11),
                Span::new(11, 12),
                Span::new(12, 12),
            ]
        );
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..3 {
            let tok = lexer.next_token();
            assert_eq!(tok.kind, TokenKind::Eof);
            assert_eq!(tok.literal, "");
            assert_eq!(tok.span, Span::new(1, 1));
        }
    }

    #[test]
    fn test_iterator_is_finite_and_restartable() {
        let mut lexer = Lexer::new("  1 +\r\n 2 ");
        let first: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
        assert_eq!(
            first,
            vec![
                TokenKind::Int,
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Int,
                TokenKind::Eof
            ]
        );
        assert!(lexer.next().is_none());

        lexer.reset();
        let second: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
        assert_eq!(kinds(" \t\r\n"), vec![TokenKind::Eof]);
    }
}
