//! Arith language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via the registry tables, instead of comparing raw strings.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use arith_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
