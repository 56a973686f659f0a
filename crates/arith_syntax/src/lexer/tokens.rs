//! Token types for the arith lexer.
//!
//! ## Notes
//! - Operator tokens carry their registry [`OperatorId`] so the parser never compares operator spellings.
//! - Every token keeps its exact source text and byte span; the text of [`TokenKind::EndOfInput`] is empty.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use arith_core::lang::keywords::{self, KeywordId};
use arith_core::lang::operators::{self, OperatorId};
use arith_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    Equals,
    OpenParen,
    CloseParen,
    BinaryOperator(OperatorId),
    Let,
    /// Sentinel that terminates every token sequence.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Equals => write!(f, "'{}'", punctuation::as_str(PunctuationId::Equals)),
            TokenKind::OpenParen => write!(f, "'{}'", punctuation::as_str(PunctuationId::LParen)),
            TokenKind::CloseParen => write!(f, "'{}'", punctuation::as_str(PunctuationId::RParen)),
            TokenKind::BinaryOperator(id) => write!(f, "operator '{}'", operators::as_str(*id)),
            TokenKind::Let => write!(f, "keyword '{}'", keywords::as_str(KeywordId::Let)),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token with its kind, exact source text, and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Construct the end-of-input sentinel at byte offset `at`.
    pub fn end_of_input(at: usize) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), Span::new(at, at))
    }
}

/// Resolve an identifier spelling to its token kind: a keyword kind if reserved, otherwise `Identifier`.
pub fn word_kind(spelling: &str) -> TokenKind {
    match keywords::from_str(spelling) {
        Some(KeywordId::Let) => TokenKind::Let,
        None => TokenKind::Identifier,
    }
}

/// Token kind for a punctuation id.
pub fn punctuation_kind(id: PunctuationId) -> TokenKind {
    match id {
        PunctuationId::LParen => TokenKind::OpenParen,
        PunctuationId::RParen => TokenKind::CloseParen,
        PunctuationId::Equals => TokenKind::Equals,
    }
}
