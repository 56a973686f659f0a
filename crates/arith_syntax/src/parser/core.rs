// Parser core type and entrypoint.
//
// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Deepest expression the parser builds, counted both as open parentheses and as tree height.
///
/// Parentheses recurse through the precedence ladder and every tree walk (drop, printing, comparison) recurses
/// once per level, so both are capped to keep stack use bounded for any input.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state: a forward-only cursor over an immutable token slice.
///
/// ## Notes
/// - The parser is single-pass and stops at the first error; there is no recovery.
/// - Tokens are never removed; consuming one only moves `pos` forward.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Parentheses currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Errors
    /// Returns [`ParseErrorKind::Internal`] if `tokens` is empty or does not end with
    /// [`TokenKind::EndOfInput`]. The cursor relies on that sentinel to never run off the end.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.is_end() => Ok(Self { tokens, pos: 0, depth: 0 }),
            Some(last) => Err(ParseError::new(
                ParseErrorKind::Internal("token stream is not terminated by end of input"),
                last.span,
            )),
            None => Err(ParseError::new(
                ParseErrorKind::Internal("token stream is empty"),
                Span::default(),
            )),
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered; no partial program is returned.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            body.push(self.statement()?);
        }

        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Program { body })
    }
}
