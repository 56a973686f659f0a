//! Numeric literal scanning.
//!
//! A number is a maximal run of ASCII digits, optionally followed by `.` and another maximal digit run. The
//! fraction is only taken when a digit follows the dot, so `3.` lexes as `3` and then fails on the `.`.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan the rest of a number whose first digit has already been consumed.
    pub(super) fn scan_number(&mut self, start: usize) {
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // '.'
            self.advance_while(|c| c.is_ascii_digit());
        }

        self.add_token(TokenKind::Number, start);
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Span;
    use crate::diagnostics::LexErrorKind;
    use crate::lexer::{TokenKind, tokenize};

    #[test]
    fn test_integer() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "42");
    }

    #[test]
    fn test_decimal() {
        let tokens = tokenize("3.14 0.5").unwrap();
        assert_eq!(tokens[0].text, "3.14");
        assert_eq!(tokens[1].text, "0.5");
        assert_eq!(tokens[1].span, Span::new(5, 8));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        let err = tokenize("3.").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('.'));
        assert_eq!(err.span, Span::new(1, 2));
    }

    #[test]
    fn test_leading_dot_rejected() {
        let err = tokenize(".5").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('.'));
    }

    #[test]
    fn test_second_dot_rejected() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err.span, Span::new(3, 4));
    }

    #[test]
    fn test_minus_is_an_operator_not_a_sign() {
        let tokens = tokenize("-7").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::BinaryOperator(_)));
        assert_eq!(tokens[1].text, "7");
    }
}
