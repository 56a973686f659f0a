//! CLI module for arith
//!
//! ## Commands
//!
//! - *(none)* - Start the interactive REPL
//! - `repl [--style tree|source|debug]` - Start the REPL with a chosen output view
//! - `fmt <file> [--check]` - Print a file in canonical form, or check that it already is
//! - `--lex <file>` / `--parse <file>` - Debug dumps of the token stream or AST
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod repl;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::format::OutputStyle;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer, parser, and REPL for arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "arith")]
#[command(version = VERSION)]
#[command(about = "Tokenizer, parser, and REPL for arithmetic expressions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "parse_file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive REPL (default when no command is given)
    Repl {
        /// How each parsed line is printed
        #[arg(long, value_name = "STYLE", default_value_t = OutputStyle::Tree)]
        style: OutputStyle,
    },

    /// Print a file in canonical form
    Fmt {
        /// Source file to format
        #[arg(value_name = "FILE")]
        path: PathBuf,
        /// Check formatting without printing the result
        #[arg(long)]
        check: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Repl { style }) => commands::start_repl(style),
        Some(Command::Fmt { path, check }) => commands::format_file(&path.to_string_lossy(), check),
        None => commands::start_repl(OutputStyle::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_starts_repl() {
        let cli = Cli::try_parse_from(["arith"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.lex_file.is_none());
        assert!(cli.parse_file.is_none());
    }

    #[test]
    fn test_cli_parse_repl_style() {
        let cli = Cli::try_parse_from(["arith", "repl"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Repl {
                style: OutputStyle::Tree
            })
        ));

        let cli = Cli::try_parse_from(["arith", "repl", "--style", "source"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Repl {
                style: OutputStyle::Source
            })
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_style() {
        assert!(Cli::try_parse_from(["arith", "repl", "--style", "json"]).is_err());
    }

    #[test]
    fn test_cli_parse_fmt() {
        let cli = Cli::try_parse_from(["arith", "fmt", "calc.ar", "--check"]).unwrap();
        if let Some(Command::Fmt { path, check }) = cli.command {
            assert_eq!(path, PathBuf::from("calc.ar"));
            assert!(check);
        } else {
            panic!("Expected Fmt command");
        }
    }

    #[test]
    fn test_cli_fmt_requires_file() {
        assert!(Cli::try_parse_from(["arith", "fmt"]).is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["arith", "--lex", "calc.ar"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["arith", "--parse", "calc.ar"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["arith", "--lex", "a.ar", "--parse", "b.ar"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
