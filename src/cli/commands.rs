//! CLI command implementations
//!
//! All functions return `CliResult<T>` instead of calling `process::exit`.

use std::fs;
use std::io;

use arith_syntax::diagnostics::SyntaxError;

use super::repl;
use super::{CliError, CliResult, ExitCode};
use crate::diagnostics;
use crate::format::{self, FormatConfig, OutputStyle};
use crate::{lexer, parser};

/// Maximum source file size (1 MiB)
const MAX_SOURCE_SIZE: u64 = 1024 * 1024;

/// Read a source file with size validation.
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Turn a syntax error into a CLI failure carrying the rendered diagnostic.
fn syntax_failure(file_path: &str, source: &str, error: impl Into<SyntaxError>) -> CliError {
    let error = error.into();
    CliError::failure(diagnostics::render_error(file_path, source, &error).trim_end())
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::tokenize(&source).map_err(|e| syntax_failure(file_path, &source, e))?;

    for tok in &tokens {
        println!("{:>4}..{:<4} {:<16} {:?}", tok.span.start, tok.span.end, tok.kind.to_string(), tok.text);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let program = parser::parse_program(&source).map_err(|e| syntax_failure(file_path, &source, e))?;

    print!("{}", format::render(&program, &FormatConfig::new().with_style(OutputStyle::Debug)));
    Ok(ExitCode::SUCCESS)
}

/// Print a file in canonical form, or with `check` only report whether it already is.
pub fn format_file(file_path: &str, check: bool) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let formatted = format::format_source(&source).map_err(|e| syntax_failure(file_path, &source, e))?;

    if !check {
        print!("{}", formatted);
        return Ok(ExitCode::SUCCESS);
    }

    if formatted == source {
        println!("{} is formatted", file_path);
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Would reformat: {}", file_path);
        Ok(ExitCode::FAILURE)
    }
}

/// Run the REPL on the process's stdin and stdout.
pub fn start_repl(style: OutputStyle) -> CliResult<ExitCode> {
    let config = FormatConfig::new().with_style(style);
    let stdin = io::stdin();
    let stdout = io::stdout();

    repl::run_repl(stdin.lock(), stdout.lock(), &config)
        .map_err(|e| CliError::failure(format!("REPL I/O error: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}
