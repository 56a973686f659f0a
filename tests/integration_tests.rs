//! Integration tests for the arith front end
//!
//! These exercise the public entry points end to end: source text through the lexer and parser, into the printers,
//! the diagnostics renderer, and the REPL loop.

use arith::ast::{BinaryOp, Expr, NodeType, Program, Stmt};
use arith::cli::repl::run_repl;
use arith::diagnostics::render_error;
use arith::format::{FormatConfig, OutputStyle, check_formatted, format_source, render};
use arith::lexer::{TokenKind, tokenize};
use arith::parser::{MAX_NESTING_DEPTH, parse, parse_program};
use arith_syntax::diagnostics::{ParseErrorKind, SyntaxError};
use arith_core::lang::operators::OperatorId;

fn num(v: f64) -> Expr {
    Expr::number(v)
}

// ============================================================================
// Pipeline
// ============================================================================

#[test]
fn test_staged_and_one_shot_parse_agree() {
    let source = "total / (count + 1)\nrate * 0.5";
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    assert_eq!(parse(&tokens).unwrap(), parse_program(source).unwrap());
}

#[test]
fn test_mixed_precedence_program() {
    let program = parse_program("10 + 4 * 3 - 8 / 2").unwrap();
    let expected = Expr::binary(
        Expr::binary(num(10.0), BinaryOp::Add, Expr::binary(num(4.0), BinaryOp::Mul, num(3.0))),
        BinaryOp::Sub,
        Expr::binary(num(8.0), BinaryOp::Div, num(2.0)),
    );
    assert_eq!(program.body, vec![Stmt::Expr(expected)]);
}

#[test]
fn test_node_types_cover_every_variant() {
    let program = parse_program("a * 2").unwrap();
    let Expr::Binary(left, _, right) = program.body[0].expr() else {
        panic!("expected a binary expression");
    };
    assert_eq!(program.body[0].expr().node_type(), NodeType::BinaryExpression);
    assert_eq!(left.node_type(), NodeType::Identifier);
    assert_eq!(right.node_type(), NodeType::NumberLiteral);
}

#[test]
fn test_token_stream_for_reserved_vocabulary() {
    let kinds: Vec<TokenKind> = tokenize("let y = 2 ^ 3").unwrap().into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::BinaryOperator(OperatorId::Caret),
            TokenKind::Number,
            TokenKind::EndOfInput,
        ]
    );
    assert!(parse_program("let y = 2 ^ 3").is_err());
}

// ============================================================================
// Printers
// ============================================================================

#[test]
fn test_formatting_round_trip() {
    let formatted = format_source("(a)+(b*c)\n\n(a+b)*c").unwrap();
    assert_eq!(formatted, "a + b * c\n(a + b) * c\n");
    assert!(check_formatted(&formatted).unwrap());
}

#[test]
fn test_render_styles_agree_on_content() {
    let program = parse_program("x % 3").unwrap();
    let tree = render(&program, &FormatConfig::new().with_style(OutputStyle::Tree));
    let source = render(&program, &FormatConfig::new().with_style(OutputStyle::Source));
    let debug = render(&program, &FormatConfig::new().with_style(OutputStyle::Debug));

    assert!(tree.contains("BinaryExpression (%)"));
    assert_eq!(source, "x % 3\n");
    assert!(debug.contains("Mod"));
}

#[test]
fn test_empty_program_renders() {
    let program = Program::default();
    assert_eq!(render(&program, &FormatConfig::new().with_style(OutputStyle::Source)), "");
    assert_eq!(render(&program, &FormatConfig::default()), "Program\n");
}

// ============================================================================
// Large inputs
// ============================================================================

fn is_nesting_error(result: Result<Program, SyntaxError>) -> bool {
    matches!(
        result,
        Err(SyntaxError::Parse(e)) if matches!(e.kind, ParseErrorKind::NestingTooDeep { .. })
    )
}

#[test]
fn test_deepest_accepted_trees_print_and_reparse() {
    let chain = format!("x{}", " - 1".repeat(MAX_NESTING_DEPTH - 1));
    let groups = format!("{}1{}", "2 * (".repeat(MAX_NESTING_DEPTH - 1), ")".repeat(MAX_NESTING_DEPTH - 1));

    for source in [chain, groups] {
        let program = parse_program(&source).unwrap();
        let printed = format_source(&source).unwrap();
        assert_eq!(parse_program(&printed).unwrap(), program);

        let tree = render(&program, &FormatConfig::default());
        assert_eq!(tree.lines().count(), 1 + 2 * MAX_NESTING_DEPTH - 1);
        let debug = render(&program, &FormatConfig::new().with_style(OutputStyle::Debug));
        assert!(debug.starts_with("Program {"));
    }
}

#[test]
fn test_oversized_nesting_is_an_error_not_a_crash() {
    assert!(is_nesting_error(parse_program(&format!(
        "{}1{}",
        "(".repeat(50_000),
        ")".repeat(50_000)
    ))));
    assert!(is_nesting_error(parse_program(&format!("1{}", "+1".repeat(200_000)))));
    assert!(format_source(&format!("1{}", "+1".repeat(200_000))).is_err());
}

#[test]
fn test_wide_program_round_trips() {
    let source = "(a + 1) * b\n".repeat(50_000);
    let formatted = format_source(&source).unwrap();
    assert_eq!(formatted, source);
    assert_eq!(parse_program(&formatted).unwrap().body.len(), 50_000);
}

// ============================================================================
// Diagnostics and REPL
// ============================================================================

#[test]
fn test_rendered_diagnostic_points_into_source() {
    let source = "1 +\n(2 * 3";
    let err = parse_program(source).unwrap_err();
    let out = render_error("calc.ar", source, &err);
    assert!(out.contains("calc.ar"), "got: {out}");
    assert!(out.contains("(2 * 3"), "got: {out}");
    assert!(out.contains("expected closing parenthesis"), "got: {out}");
    assert!(out.contains("opened here"), "got: {out}");
}

#[test]
fn test_repl_session() {
    let input = "2 + 2\n\n1 +\nexit\n9\n";
    let mut out = Vec::new();
    let parsed = run_repl(input.as_bytes(), &mut out, &FormatConfig::default()).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(parsed, 1);
    assert!(out.contains("BinaryExpression (+)"), "got: {out}");
    assert!(out.contains("end of input"), "got: {out}");
    assert!(!out.contains("NumberLiteral 9"), "got: {out}");
}
