/// Token-stream helpers.
///
/// This chunk contains the low-level cursor primitives used throughout parsing:
/// peeking/consuming tokens (`peek`, `advance`) and matching/expecting token kinds.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::EndOfInput`].
    fn is_at_end(&self) -> bool {
        self.peek().is_end()
    }

    /// Return the current token without consuming it.
    ///
    /// `Parser::new` guarantees a trailing sentinel and `advance` never moves past it, so the index is always
    /// in bounds.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At the sentinel the cursor stays put and the sentinel is returned.
    fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Return `true` if the current token has kind `kind`.
    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().kind == *kind
    }

    /// If the current token is the operator `id`, consume it and return `true`.
    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.peek().kind.is_operator(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of kind `kind`, or fail with the error built by `on_mismatch` from the kind found.
    fn expect(
        &mut self,
        kind: &TokenKind,
        on_mismatch: impl FnOnce(TokenKind) -> ParseErrorKind,
    ) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let found = self.peek();
            Err(ParseError::new(on_mismatch(found.kind), found.span))
        }
    }

    /// Build an "unexpected token" error for the current token.
    fn unexpected_token(&self) -> ParseError {
        let token = self.peek();
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                kind: token.kind,
                text: token.text.clone(),
            },
            token.span,
        )
    }
}
