//! Define the reserved keyword vocabulary.
//!
//! A stable identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Let` is an ordinary identifier.
//! - `let` is reserved ahead of variable bindings; the expression grammar never consumes it.
//!
//! ## Examples
//! ```rust
//! use arith_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::from_str("Let"), None);
//! ```

use super::registry::Stability;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Let,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub stability: Stability,
}

const LET: KeywordInfo = KeywordInfo {
    id: KeywordId::Let,
    canonical: "let",
    stability: Stability::Reserved,
};

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[LET];

/// Full metadata.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    match id {
        KeywordId::Let => &LET,
    }
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}
