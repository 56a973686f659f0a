//! Punctuation vocabulary.
//!
//! Non-operator symbols the lexer recognizes: parentheses and the `=` sign.
//!
//! ## Examples
//! ```rust
//! use arith_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("("), Some(PunctuationId::LParen));
//! assert_eq!(punctuation::as_str(PunctuationId::Equals), "=");
//! ```

use super::registry::Stability;

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    Equals,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub stability: Stability,
}

const LPAREN: PunctuationInfo = info(PunctuationId::LParen, "(", Stability::Stable);
const RPAREN: PunctuationInfo = info(PunctuationId::RParen, ")", Stability::Stable);
// Reserved for bindings (`let x = ...`).
const EQUALS: PunctuationInfo = info(PunctuationId::Equals, "=", Stability::Reserved);

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[LPAREN, RPAREN, EQUALS];

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::LParen => &LPAREN,
        PunctuationId::RParen => &RPAREN,
        PunctuationId::Equals => &EQUALS,
    }
}

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Resolve a single character to a punctuation token, as the lexer sees it.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION
        .iter()
        .find(|p| p.canonical.chars().eq(std::iter::once(c)))
        .map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: &'static str, stability: Stability) -> PunctuationInfo {
    PunctuationInfo { id, canonical, stability }
}
