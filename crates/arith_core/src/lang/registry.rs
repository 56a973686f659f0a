//! Shareable metadata for `arith_core::lang` registries.
//!
//! These types are lightweight and `Copy` so registries can live in `const` tables.

/// Describe whether a vocabulary item takes part in the grammar.
///
/// ## Notes
/// - `Reserved` items are recognized by the lexer (so they never lex as something else) but no grammar rule
///   consumes them yet. The parser reports them as unexpected, and diagnostics use this flag to say so.
///
/// ## Examples
/// ```rust
/// use arith_core::lang::registry::Stability;
///
/// let s = Stability::Reserved;
/// assert_eq!(format!("{s:?}"), "Reserved");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Reserved,
}

impl Stability {
    /// Return `true` if a grammar rule consumes this item.
    pub const fn is_supported(self) -> bool {
        matches!(self, Stability::Stable)
    }
}

