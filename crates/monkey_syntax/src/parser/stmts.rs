/// Statement parsing methods.
///
/// Dispatch is on the current token: `let`, `return`, or anything else as an expression statement. A trailing `;`
/// is optional everywhere, so a REPL line like `x + 1` is a complete statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.cur_token.kind {
            TokenKind::Keyword(KeywordId::Let) => self.parse_let_statement(),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur_token.literal.clone());

        self.expect_peek(TokenKind::Operator(OperatorId::Assign))?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Let(LetStatement { name, value }))
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return(ReturnStatement { value }))
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression(ExpressionStatement { expression }))
    }
}
