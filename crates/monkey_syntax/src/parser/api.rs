/// Parse source text into a [`Program`] with the default [`ParserConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Notes
/// - Parsing never fails outright: check [`ParseOutput::errors`] (or call [`ParseOutput::into_result`]) before
///   trusting that the program is complete.
pub fn parse(source: &str) -> ParseOutput {
    parse_with_config(source, ParserConfig::default())
}

/// Parse source text into a [`Program`] with an explicit [`ParserConfig`].
#[tracing::instrument(name = "parse", skip_all, fields(source_len = source.len(), max_depth = config.max_depth))]
pub fn parse_with_config(source: &str, config: ParserConfig) -> ParseOutput {
    let mut parser = Parser::with_config(Lexer::new(source), config);
    let program = parser.parse_program();
    let errors = parser.into_errors();
    tracing::debug!(
        statements = program.statements.len(),
        errors = errors.len(),
        "parsed program"
    );
    ParseOutput { program, errors }
}
