/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its configuration, the [`ParseOutput`] bundle,
/// and the top-level `parse_program()` loop.
///
/// Prefix and infix strategies are plain function pointers so the rule tables in `expr.rs` stay `match`es.
///
/// Strategy for a token that starts an expression.
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression, ParseError>;

/// Strategy for an operator token found between two operands.
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Result<Expression, ParseError>;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested expression levels (parentheses, prefix operators, operands).
    pub max_depth: usize,
}

impl ParserConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Set the expression nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass. A malformed statement is recorded as a [`ParseError`], dropped, and the parser
///   synchronizes at the next statement boundary.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default [`ParserConfig`].
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_config(lexer, ParserConfig::default())
    }

    /// Create a parser, priming the current and peek tokens from `lexer`.
    pub fn with_config(mut lexer: Lexer<'a>, config: ParserConfig) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            config,
            depth: 0,
        }
    }

    /// Parse statements until `EOF`.
    ///
    /// Always returns a program. Statements that failed to parse are absent from it, and the matching errors are
    /// available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(stmt) => {
                    tracing::trace!(statement = %stmt, "parsed statement");
                    statements.push(stmt);
                }
                Err(e) => {
                    tracing::debug!(code = e.code_str(), error = %e, "recorded parse error");
                    self.errors.push(e);
                    self.synchronize();
                }
            }
            self.advance();
        }

        Program { statements }
    }

    /// Errors recorded so far, in discovery order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

/// A parsed program together with every error recorded while parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Treat any recorded error as a failed parse.
    ///
    /// ## Errors
    /// Returns every recorded [`ParseError`] if the list is non-empty; the partial program is discarded.
    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}
