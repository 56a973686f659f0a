//! Snapshot of user-facing error messages and their locations.
//!
//! Run with: `cargo test -p arith_syntax --test error_messages`
//! Review changes: `cargo insta review`

use arith_syntax::parser::parse_program;

fn describe(source: &str) -> String {
    match parse_program(source) {
        Ok(program) => format!("ok: {} statement(s)", program.body.len()),
        Err(err) => format!("{} @ {}..{}", err, err.span().start, err.span().end),
    }
}

#[test]
fn test_error_messages() {
    let inputs = ["1 + $", "(1 + 2", "1 +", "2 ^ 3", "let x = 1", "3.", "1)", ""];
    let report = inputs
        .iter()
        .map(|source| format!("{source:?} => {}", describe(source)))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(report, @r#"
    "1 + $" => unexpected character '$' @ 4..5
    "(1 + 2" => expected closing parenthesis, found end of input @ 6..6
    "1 +" => unexpected end of input, expected a number, an identifier, or '(' @ 3..3
    "2 ^ 3" => unexpected operator '^', expected a number, an identifier, or '(' @ 2..3
    "let x = 1" => keyword 'let' cannot start a statement @ 0..3
    "3." => unexpected character '.' @ 1..2
    "1)" => unexpected ')', expected a number, an identifier, or '(' @ 1..2
    "" => ok: 0 statement(s)
    "#);
}
