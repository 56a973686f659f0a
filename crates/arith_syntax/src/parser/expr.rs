/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder:
/// additive → multiplicative → primary.
///
/// ## Notes
/// - Each binary level parses one operand from the level below, then loops over (operator, operand) pairs
///   folding to the left. No level calls itself before consuming a token, so parsing terminates in the
///   number of remaining tokens and same-precedence chains associate left.
/// - Every rule returns the height of the tree it built next to the tree itself, so the fold can enforce
///   [`MAX_NESTING_DEPTH`] without walking the tree again.
/// - Operator identities are carried by [`TokenKind::BinaryOperator`] / [`OperatorId`] rather than spellings.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<(Expr, usize), ParseError> {
        self.additive()
    }

    fn additive(&mut self) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut height) = self.multiplicative()?;

        loop {
            let op_span = self.peek().span;
            let op = if self.match_op(OperatorId::Plus) {
                BinaryOp::Add
            } else if self.match_op(OperatorId::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };

            let (right, right_height) = self.multiplicative()?;
            height = fold_height(height, right_height, op_span)?;
            left = Expr::binary(left, op, right);
        }

        Ok((left, height))
    }

    fn multiplicative(&mut self) -> Result<(Expr, usize), ParseError> {
        let (mut left, mut height) = self.primary()?;

        loop {
            let op_span = self.peek().span;
            let op = if self.match_op(OperatorId::Star) {
                BinaryOp::Mul
            } else if self.match_op(OperatorId::Slash) {
                BinaryOp::Div
            } else if self.match_op(OperatorId::Percent) {
                BinaryOp::Mod
            } else {
                break;
            };

            let (right, right_height) = self.primary()?;
            height = fold_height(height, right_height, op_span)?;
            left = Expr::binary(left, op, right);
        }

        Ok((left, height))
    }

    fn primary(&mut self) -> Result<(Expr, usize), ParseError> {
        match self.peek().kind {
            TokenKind::Number => {
                let token = self.advance();
                Ok((number_literal(token)?, 1))
            }

            TokenKind::Identifier => {
                let name = self.advance().text.clone();
                Ok((Expr::Ident(name), 1))
            }

            // Parenthesized expression: the parentheses themselves leave no node behind.
            TokenKind::OpenParen => {
                let opened_at = self.peek().span;
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(nesting_too_deep(opened_at));
                }
                self.advance();

                self.depth += 1;
                let inner = self.expression();
                self.depth -= 1;
                let inner = inner?;

                self.expect(&TokenKind::CloseParen, |found| ParseErrorKind::UnclosedParenthesis {
                    found,
                    opened_at,
                })?;
                Ok(inner)
            }

            _ => Err(self.unexpected_token()),
        }
    }
}

/// Height of a binary node over operands of the given heights, or an error at `op_span` past the limit.
fn fold_height(left: usize, right: usize, op_span: Span) -> Result<usize, ParseError> {
    let height = left.max(right) + 1;
    if height > MAX_NESTING_DEPTH {
        return Err(nesting_too_deep(op_span));
    }
    Ok(height)
}

fn nesting_too_deep(span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        },
        span,
    )
}

/// Convert a `Number` token into a literal.
///
/// The lexer only produces digit runs with an optional fraction, but tokens can also be built by hand, so the
/// text is checked rather than trusted (`f64::from_str` alone would accept `inf` and `NaN`). Digit runs too long
/// for an `f64` overflow to infinity and are rejected the same way.
fn number_literal(token: &Token) -> Result<Expr, ParseError> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidNumber(token.text.clone()), token.span);

    if !token.text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }
    match token.text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expr::Number(value)),
        _ => Err(invalid()),
    }
}
