//! Lexer for the arith expression language
//!
//! A single left-to-right scan with no backtracking. Handles:
//! - Numbers (`42`, `3.14`)
//! - Identifiers and the reserved word `let`
//! - Operators `+ - * / % ^` and punctuation `( ) =`
//! - Whitespace (space, tab, `\r`, `\n`), which is skipped
//!
//! Any other character stops the scan with [`LexError`]; the parser never sees a partial stream.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning

mod numbers;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::LexError;
use arith_core::lang::operators::OperatorId;
use arith_core::lang::punctuation::PunctuationId;

/// Lexer for arith source code.
///
/// Converts source text into a stream of tokens terminated by [`TokenKind::EndOfInput`].
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `EndOfInput` token.
    ///
    /// ## Errors
    /// Returns the first [`LexError`] encountered; no tokens are returned in that case.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        self.tokens.push(Token::end_of_input(self.current_pos));
        tracing::debug!(token_count = self.tokens.len(), "tokenized source");
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    /// Consume characters while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {}

            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '=' => self.add_punct(PunctuationId::Equals, start),

            '+' => self.add_op(OperatorId::Plus, start),
            '-' => self.add_op(OperatorId::Minus, start),
            '*' => self.add_op(OperatorId::Star, start),
            '/' => self.add_op(OperatorId::Slash, start),
            '%' => self.add_op(OperatorId::Percent, start),
            '^' => self.add_op(OperatorId::Caret, start),

            '0'..='9' => self.scan_number(start),

            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                tracing::debug!(character = ?c, offset = start, "unexpected character");
                return Err(LexError::unexpected_char(c, Span::new(start, self.current_pos)));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.current_pos];
        self.tokens.push(Token::new(kind, text, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::BinaryOperator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(tokens::punctuation_kind(id), start);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        self.advance_while(is_ident_continue);

        let spelling = &self.source[start..self.current_pos];
        self.add_token(tokens::word_kind(spelling), start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert a source string into a token sequence.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
