#![forbid(unsafe_code)]
//! Arith: a small arithmetic expression language front end
//!
//! This crate wires the syntax frontend (`arith_syntax`) into user-facing tooling: a canonical printer, a tree
//! renderer, source-annotated diagnostics, an interactive REPL, and the `arith` command-line interface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod diagnostics;
pub mod format;

pub use arith_syntax::ast;
pub use arith_syntax::lexer;
pub use arith_syntax::parser;

pub use format::{FormatConfig, OutputStyle, check_formatted, format_source, render};
