//! Syntax frontend for the arith expression language: lexer, parser, AST, diagnostics.
//!
//! The pipeline is `source text -> lexer -> token sequence -> parser -> AST`. Both stages are synchronous,
//! pure, and stop at the first error; there is no error recovery and no partial AST.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not evaluate, bind names, or check types.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `arith_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use arith_syntax::ast::{BinaryOp, Expr};
//! use arith_syntax::parser;
//!
//! let program = parser::parse_program("2 + 3 * 4").unwrap();
//! assert_eq!(program.body.len(), 1);
//! assert_eq!(
//!     program.body[0].expr(),
//!     &Expr::binary(Expr::number(2.0), BinaryOp::Add, Expr::binary(Expr::number(3.0), BinaryOp::Mul, Expr::number(4.0))),
//! );
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
