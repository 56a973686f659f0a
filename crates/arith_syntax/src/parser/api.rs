/// Parse a token stream into an AST [`Program`].
///
/// ## Parameters
/// - `tokens`: Token stream produced by [`lexer::tokenize`], terminated by `EndOfInput`.
///
/// ## Errors
/// Returns the first [`ParseError`] if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens)?.parse()
}

/// Tokenize and parse a source string.
///
/// This is the main public entrypoint. Each call allocates its own token stream and cursor, so calls are
/// independent of each other.
///
/// ## Errors
/// Returns [`SyntaxError::Lex`] if tokenizing fails (the parser never runs), or [`SyntaxError::Parse`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_program(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lexer::tokenize(source)?;
    Ok(parse(&tokens)?)
}
