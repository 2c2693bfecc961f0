/// Expression parsing methods (Pratt / precedence climbing).
///
/// Every token kind that can start an expression maps to a prefix rule, and every infix operator maps to an infix
/// rule. Both tables are fixed `match`es over [`TokenKind`]; binding powers come from
/// `monkey_core::lang::operators`.
///
/// ## Notes
/// - Left-associativity falls out of the loop condition: an operator only extends the current left-hand side while
///   its precedence is strictly greater than the caller's. Right-associative operators parse their right operand one
///   step lower.
/// - Prefix operators parse their operand at [`Precedence::Prefix`], so `-a*b` is `((-a)*b)`.
/// - [`ParserConfig::max_depth`] bounds the height of the tree, not just recursion: every pass of the infix loop
///   nests the left-hand side one level deeper, so it counts against the limit too.
impl<'a> Parser<'a> {
    // ========================================================================
    // Rule tables
    // ========================================================================

    fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Keyword(KeywordId::True | KeywordId::False) => Some(Self::parse_boolean),
            TokenKind::Operator(id) if operators::is_prefix(id) => Some(Self::parse_prefix_expression),
            TokenKind::Punctuation(PunctuationId::LParen) => Some(Self::parse_grouped_expression),
            _ => None,
        }
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        match kind {
            TokenKind::Operator(id) if operators::infix_precedence(id).is_some() => Some(Self::parse_infix_expression),
            _ => None,
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
                span: self.cur_token.span,
            });
        }

        self.depth += 1;
        let result = self.parse_expression_at(precedence);
        self.depth -= 1;
        result
    }

    fn parse_expression_at(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
        let Some(prefix) = Self::prefix_rule(self.cur_token.kind) else {
            return Err(self.no_prefix_error());
        };
        let left = prefix(self)?;

        let entry_depth = self.depth;
        let result = self.parse_infix_chain(precedence, left);
        self.depth = entry_depth;
        result
    }

    /// Extend `left` with infix operators while they bind tighter than `precedence`.
    fn parse_infix_chain(&mut self, precedence: Precedence, mut left: Expression) -> Result<Expression, ParseError> {
        while !self.peek_token.kind.is_punctuation(PunctuationId::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_rule(self.peek_token.kind) else {
                return Ok(left);
            };
            if self.depth >= self.config.max_depth {
                return Err(ParseError::NestingTooDeep {
                    limit: self.config.max_depth,
                    span: self.peek_token.span,
                });
            }
            self.depth += 1;
            self.advance();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn no_prefix_error(&self) -> ParseError {
        let tok = &self.cur_token;
        match tok.kind {
            TokenKind::Illegal => ParseError::IllegalCharacter {
                literal: tok.literal.clone(),
                span: tok.span,
            },
            kind => ParseError::NoPrefixRule {
                kind: kind.tag(),
                span: tok.span,
            },
        }
    }

    // ========================================================================
    // Prefix rules
    // ========================================================================

    fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Identifier(Identifier::new(self.cur_token.literal.clone())))
    }

    fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
        let literal = self.cur_token.literal.clone();
        let Ok(value) = literal.parse::<i64>() else {
            return Err(ParseError::InvalidInteger {
                literal,
                span: self.cur_token.span,
            });
        };
        Ok(Expression::Integer(IntegerLiteral { value, literal }))
    }

    fn parse_boolean(&mut self) -> Result<Expression, ParseError> {
        Ok(Expression::Boolean(BooleanLiteral {
            value: self.cur_token.kind.is_keyword(KeywordId::True),
            literal: self.cur_token.literal.clone(),
        }))
    }

    /// `!<expr>` / `-<expr>`
    fn parse_prefix_expression(&mut self) -> Result<Expression, ParseError> {
        let Some(operator) = self.cur_token.kind.operator_id() else {
            return Err(self.no_prefix_error());
        };
        self.advance();

        let operand = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix(PrefixExpression {
            operator,
            operand: Box::new(operand),
        }))
    }

    /// `( <expr> )`
    fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
        self.advance();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen))?;
        Ok(expr)
    }

    // ========================================================================
    // Infix rules
    // ========================================================================

    /// `<left> <op> <expr>`
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression, ParseError> {
        let Some(operator) = self.cur_token.kind.operator_id() else {
            return Err(self.no_prefix_error());
        };
        let precedence = match operators::associativity(operator) {
            Associativity::Right => self.cur_precedence().lower(),
            Associativity::Left | Associativity::None => self.cur_precedence(),
        };
        self.advance();

        let right = self.parse_expression(precedence)?;
        Ok(Expression::Infix(InfixExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }
}
