//! Arith printers
//!
//! Turns a parsed [`Program`] back into text. Three views are available through [`OutputStyle`]:
//! - `Source`: canonical source, one statement per line, with only the parentheses precedence and associativity
//!   require
//! - `Tree`: an indented node listing, used by the REPL
//! - `Debug`: the raw AST as Rust debug output
//!
//! Canonical source is stable: formatting already-formatted text returns it unchanged.

mod config;
mod formatter;
mod writer;

pub use config::{FormatConfig, OutputStyle};
pub use formatter::Formatter;

use arith_syntax::diagnostics::SyntaxError;

use crate::ast::Program;
use crate::parser;

/// Parse `source` and print it as canonical source text
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn format_source(source: &str) -> Result<String, SyntaxError> {
    let program = parser::parse_program(source)?;
    Ok(render(&program, &FormatConfig::new().with_style(OutputStyle::Source)))
}

/// Print an already-parsed program in the style `config` selects
pub fn render(program: &Program, config: &FormatConfig) -> String {
    Formatter::new(config).format(program)
}

/// Check if source code is already in canonical form
pub fn check_formatted(source: &str) -> Result<bool, SyntaxError> {
    let formatted = format_source(source)?;
    Ok(source == formatted)
}
