//! Interactive read-parse-print loop
//!
//! Each line is parsed on its own and printed in the configured [`OutputStyle`](crate::format::OutputStyle).
//! Errors are rendered as diagnostics and the loop keeps going; only end of input or `exit` stops it.

use std::io::{self, BufRead, Write};

use crate::diagnostics;
use crate::format::{self, FormatConfig};
use crate::parser;

const PROMPT: &str = ">>> ";
const EXIT_COMMAND: &str = "exit";
const SOURCE_NAME: &str = "<repl>";

/// Run the REPL over any line source and sink.
///
/// Returns the number of lines that parsed successfully.
pub fn run_repl<R: BufRead, W: Write>(mut input: R, mut output: W, config: &FormatConfig) -> io::Result<usize> {
    writeln!(output, "arith v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(output, "Type an expression to see its syntax tree, or `{EXIT_COMMAND}` to quit.")?;

    let mut parsed = 0;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let text = line.trim();
        if text == EXIT_COMMAND {
            break;
        }
        if text.is_empty() {
            continue;
        }

        match parser::parse_program(text) {
            Ok(program) => {
                parsed += 1;
                write!(output, "{}", format::render(&program, config))?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "repl line rejected");
                writeln!(output, "{}", diagnostics::render_error(SOURCE_NAME, text, &err).trim_end())?;
            }
        }
    }

    Ok(parsed)
}
