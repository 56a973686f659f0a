//! Error types for the arith syntax frontend.
//!
//! Both stages fail fast: the lexer stops at the first character it cannot classify, the parser at the first
//! token a grammar rule cannot accept. Every error carries the [`Span`] of the offending character or token and
//! integrates with [`miette`] for rendering with source context.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::TokenKind;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// Lexing
// ============================================================================

/// A lexical error encountered during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(
    code(arith::lex),
    help("expressions may contain digits, letters, '_', whitespace, and ( ) + - * / % ^ =")
)]
pub struct LexError {
    pub kind: LexErrorKind,
    #[label("here")]
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected character" error.
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), span)
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that is not a digit, identifier character, whitespace, or known symbol.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}

// ============================================================================
// Parsing
// ============================================================================

/// A syntax error raised by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Reason a parse failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A token that no rule accepts at this position.
    #[error("unexpected {kind}, expected a number, an identifier, or '('")]
    UnexpectedToken { kind: TokenKind, text: String },

    /// A number token whose text is not a numeric literal.
    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),

    /// An opening parenthesis with no matching closing one.
    #[error("expected closing parenthesis, found {found}")]
    UnclosedParenthesis { found: TokenKind, opened_at: Span },

    /// A statement form the grammar does not support.
    #[error("{kind} cannot start a statement")]
    InvalidStatement { kind: TokenKind },

    /// Parentheses or operator chains nested past the parser's depth limit.
    #[error("expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    /// The parser was handed a token stream that breaks the lexer's guarantees.
    #[error("internal parser error: {0}")]
    Internal(&'static str),
}

impl ParseErrorKind {
    fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => "arith::parse::unexpected_token",
            ParseErrorKind::InvalidNumber(_) => "arith::parse::invalid_number",
            ParseErrorKind::UnclosedParenthesis { .. } => "arith::parse::unclosed_parenthesis",
            ParseErrorKind::InvalidStatement { .. } => "arith::parse::invalid_statement",
            ParseErrorKind::NestingTooDeep { .. } => "arith::parse::nesting_too_deep",
            ParseErrorKind::Internal(_) => "arith::parse::internal",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            ParseErrorKind::UnexpectedToken { kind, .. } if kind.is_reserved() => {
                Some(format!("{kind} is reserved but not supported in expressions yet"))
            }
            ParseErrorKind::UnexpectedToken {
                kind: TokenKind::EndOfInput,
                ..
            } => Some("the expression ends early; add an operand".to_string()),
            ParseErrorKind::UnclosedParenthesis { .. } => Some("add a matching ')'".to_string()),
            ParseErrorKind::InvalidStatement { .. } => {
                Some("only expression statements are supported; bindings are not".to_string())
            }
            ParseErrorKind::NestingTooDeep { .. } => {
                Some("split the expression into several statements or drop redundant parentheses".to_string())
            }
            _ => None,
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind.help().map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let primary = LabeledSpan::new_with_span(Some("here".to_string()), self.span);
        let labels = match &self.kind {
            ParseErrorKind::UnclosedParenthesis { opened_at, .. } => vec![
                LabeledSpan::new_with_span(Some("opened here".to_string()), *opened_at),
                primary,
            ],
            _ => vec![primary],
        };
        Some(Box::new(labels.into_iter()))
    }
}

// ============================================================================
// Either stage
// ============================================================================

/// Failure of a full `source -> Program` parse.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Location of the offending character or token.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(e) => e.span(),
            SyntaxError::Parse(e) => e.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arith_core::lang::operators::OperatorId;

    #[test]
    fn test_lex_error_message() {
        let err = LexError::unexpected_char('$', Span::new(2, 3));
        assert_eq!(err.to_string(), "unexpected character '$'");
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("arith::lex"));
    }

    #[test]
    fn test_reserved_operator_gets_help() {
        let err = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                kind: TokenKind::BinaryOperator(OperatorId::Caret),
                text: "^".to_string(),
            },
            Span::new(2, 3),
        );
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("reserved"), "got: {help}");
    }

    #[test]
    fn test_unclosed_parenthesis_labels_both_ends() {
        let err = ParseError::new(
            ParseErrorKind::UnclosedParenthesis {
                found: TokenKind::EndOfInput,
                opened_at: Span::new(0, 1),
            },
            Span::new(6, 6),
        );
        assert_eq!(err.to_string(), "expected closing parenthesis, found end of input");
        let labels: Vec<LabeledSpan> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[1].offset(), 6);
    }

    #[test]
    fn test_nesting_error_has_code_and_help() {
        let err = ParseError::new(ParseErrorKind::NestingTooDeep { limit: 256 }, Span::new(9, 10));
        assert_eq!(err.to_string(), "expression nests deeper than 256 levels");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("arith::parse::nesting_too_deep")
        );
        assert!(err.help().is_some());
    }

    #[test]
    fn test_inverted_span_converts_to_empty_source_span() {
        let err = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                kind: TokenKind::CloseParen,
                text: ")".to_string(),
            },
            Span::new(5, 2),
        );
        let labels: Vec<LabeledSpan> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels[0].offset(), 5);
        assert_eq!(labels[0].len(), 0);
    }

    #[test]
    fn test_syntax_error_is_transparent() {
        let err: SyntaxError = LexError::unexpected_char('.', Span::new(1, 2)).into();
        assert_eq!(err.to_string(), "unexpected character '.'");
        assert_eq!(err.span(), Span::new(1, 2));
    }
}
