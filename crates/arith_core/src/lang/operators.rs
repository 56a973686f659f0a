//! Operator vocabulary.
//!
//! This module defines the canonical binary operator set along with the metadata the parser and printers agree
//! on: precedence, associativity, and whether the grammar consumes the operator at all.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (all spellings are single symbols anyway).
//! - `^` is lexed as an operator but is [`Stability::Reserved`]: no precedence level of the parser consumes it.
//!
//! ## Examples
//! ```rust
//! use arith_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::info_for(OperatorId::Plus).precedence, 50);
//! ```

use super::registry::Stability;

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is a relative ordering where higher binds tighter. The absolute scale is an implementation
///   detail, but must be consistent between the parser and the printers.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
    pub stability: Stability,
}

const PLUS: OperatorInfo = op(OperatorId::Plus, "+", 50, Associativity::Left, Stability::Stable);
const MINUS: OperatorInfo = op(OperatorId::Minus, "-", 50, Associativity::Left, Stability::Stable);
const STAR: OperatorInfo = op(OperatorId::Star, "*", 60, Associativity::Left, Stability::Stable);
const SLASH: OperatorInfo = op(OperatorId::Slash, "/", 60, Associativity::Left, Stability::Stable);
const PERCENT: OperatorInfo = op(OperatorId::Percent, "%", 60, Associativity::Left, Stability::Stable);
const CARET: OperatorInfo = op(OperatorId::Caret, "^", 70, Associativity::Right, Stability::Reserved);

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[PLUS, MINUS, STAR, SLASH, PERCENT, CARET];

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    match id {
        OperatorId::Plus => &PLUS,
        OperatorId::Minus => &MINUS,
        OperatorId::Star => &STAR,
        OperatorId::Slash => &SLASH,
        OperatorId::Percent => &PERCENT,
        OperatorId::Caret => &CARET,
    }
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Resolve a single character to an operator, as the lexer sees it.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spelling.chars().eq(std::iter::once(c)))
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: u8,
    associativity: Associativity,
    stability: Stability,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        stability,
    }
}
