/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Moving through the stream (`advance`)
/// - Checking the current/peek tokens (`cur_is`, `peek_is`, `peek_precedence`)
/// - Expecting a token in peek position (`expect_peek`)
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Shift the peek token into current position and pull a new peek token from the lexer.
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// If the peek token is `kind`, advance onto it. Otherwise report what was found instead.
    ///
    /// The stream is left untouched on failure.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.tag(),
                found: self.peek_token.kind.tag(),
                span: self.peek_token.span,
            })
        }
    }

    /// Consume a trailing `;` if one follows.
    fn skip_optional_semicolon(&mut self) {
        if self.peek_token.kind.is_punctuation(PunctuationId::Semicolon) {
            self.advance();
        }
    }

    /// Infix binding power of a token kind; [`Precedence::Lowest`] for anything that is not an infix operator.
    fn precedence_of(kind: TokenKind) -> Precedence {
        kind.operator_id()
            .and_then(operators::infix_precedence)
            .unwrap_or(Precedence::Lowest)
    }

    fn peek_precedence(&self) -> Precedence {
        Self::precedence_of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Self::precedence_of(self.cur_token.kind)
    }

    /// Skip the rest of a failed statement.
    ///
    /// Stops on the terminating `;` or `EOF`, or just before a token that starts a `let`/`return` statement. The
    /// caller's `advance()` then moves onto the first token of the next statement.
    fn synchronize(&mut self) {
        loop {
            if self.cur_token.kind.is_punctuation(PunctuationId::Semicolon) || self.cur_is(TokenKind::Eof) {
                return;
            }
            if self.peek_token.kind.starts_statement() {
                return;
            }
            self.advance();
        }
    }
}
