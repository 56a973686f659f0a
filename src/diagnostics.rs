//! Rendering syntax errors against the source they came from
//!
//! Lexer and parser errors implement [`miette::Diagnostic`] but carry only byte spans. This module attaches the
//! source text and a display name, then renders the report as plain text for the terminal.

use arith_syntax::diagnostics::SyntaxError;
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};

/// Render `error` with source context, labels, and help.
///
/// `name` is shown in the location header (a file path, or `<repl>`). Output contains no ANSI escapes so it can be
/// captured or compared in tests.
pub fn render_error(name: &str, source: &str, error: &SyntaxError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());

    let mut out = String::new();
    if handler.render_report(&mut out, report.as_ref()).is_err() {
        return format_error_plain(name, source, error);
    }
    out
}

/// One-line `name:line:col: message` form of `error`.
pub fn format_error_plain(name: &str, source: &str, error: &SyntaxError) -> String {
    let (line, col) = line_col(source, error.span().start);
    format!("{name}:{line}:{col}: {error}")
}

/// 1-based line and column (in characters) of a byte offset.
///
/// Offsets past the end clamp to the end of `source`; offsets inside a multi-byte character count that character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut col = 1;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }

    (line, col)
}
