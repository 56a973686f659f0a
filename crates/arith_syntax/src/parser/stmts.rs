/// Statement parsing.
///
/// Every statement is an expression statement. `let` and `=` are lexed (they are reserved for
/// bindings) but cannot begin a statement.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Let | TokenKind::Equals => Err(ParseError::new(
                ParseErrorKind::InvalidStatement { kind: token.kind },
                token.span,
            )),
            _ => {
                let start = token.span.start;
                let (expr, _) = self.expression()?;
                tracing::trace!(start, end = self.peek().span.start, "parsed expression statement");
                Ok(Stmt::Expr(expr))
            }
        }
    }
}
