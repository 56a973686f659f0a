//! Parser for the arith expression language
//!
//! Converts a token stream into an AST by recursive descent over explicit precedence levels:
//!
//! ```text
//! statement      := expression
//! expression     := additive
//! additive       := multiplicative ( ('+' | '-') multiplicative )*
//! multiplicative := primary ( ('*' | '/' | '%') primary )*
//! primary        := NUMBER | IDENTIFIER | '(' expression ')'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use arith_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("1 - 2 - 3").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.body.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{ParseError, ParseErrorKind, SyntaxError};
use crate::lexer::{self, Token, TokenKind};
use arith_core::lang::operators::OperatorId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
