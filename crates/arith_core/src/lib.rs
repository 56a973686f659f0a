//! Canonical language vocabulary for the arith expression language.
//!
//! This crate is intentionally tiny and dependency-free. It holds the registries that the lexer, parser, and
//! tooling agree on: which words are reserved, which symbols are operators (and how tightly they bind), and which
//! symbols are punctuation.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - Enforcement of syntax rules lives in `arith_syntax`; registries only describe spellings and metadata.

pub mod lang;
