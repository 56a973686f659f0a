//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use arith_core::lang::keywords::KeywordId;
use arith_core::lang::operators::{self, OperatorId};
use arith_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Let => Some(KeywordId::Let),
            _ => None,
        }
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::BinaryOperator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::BinaryOperator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::OpenParen => Some(PunctuationId::LParen),
            TokenKind::CloseParen => Some(PunctuationId::RParen),
            TokenKind::Equals => Some(PunctuationId::Equals),
            _ => None,
        }
    }

    /// Return `true` if the lexer recognizes this token but no grammar rule consumes it yet.
    pub fn is_reserved(&self) -> bool {
        match self {
            TokenKind::BinaryOperator(id) => !operators::info_for(*id).stability.is_supported(),
            TokenKind::Let | TokenKind::Equals => true,
            _ => false,
        }
    }

    /// Return `true` if this is the end-of-input sentinel.
    pub fn is_end(&self) -> bool {
        matches!(self, TokenKind::EndOfInput)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.is_end()`.
    pub fn is_end(&self) -> bool {
        self.kind.is_end()
    }
}
