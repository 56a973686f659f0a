//! Core printing logic for arith programs
//!
//! Walks the AST and emits either canonical source text or an indented node listing.

use arith_core::lang::operators::Associativity;

use super::config::{FormatConfig, OutputStyle};
use super::writer::FormatWriter;
use crate::ast::{BinaryOp, Expr, NodeType, Program, Stmt};

/// Which side of a binary node a child sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Formatter that turns an AST back into text
pub struct Formatter {
    writer: FormatWriter,
    style: OutputStyle,
}

impl Formatter {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            writer: FormatWriter::new(config),
            style: config.style,
        }
    }

    /// Print a program in the configured style and return the text
    pub fn format(mut self, program: &Program) -> String {
        match self.style {
            OutputStyle::Source => self.format_program(program),
            OutputStyle::Tree => self.tree_program(program),
            OutputStyle::Debug => self.writer.writeln(&format!("{program:#?}")),
        }
        self.writer.finish()
    }

    // ========================================================================
    // Canonical source
    // ========================================================================

    fn format_program(&mut self, program: &Program) {
        for stmt in &program.body {
            match stmt {
                Stmt::Expr(expr) => self.format_expr(expr),
            }
            self.writer.newline();
        }
    }

    fn format_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(value) => self.writer.write(&format_number(*value)),
            Expr::Ident(name) => self.writer.write(name),
            Expr::Binary(left, op, right) => {
                self.format_operand(left, *op, Side::Left);
                self.writer.write(" ");
                self.writer.write(op.as_str());
                self.writer.write(" ");
                self.format_operand(right, *op, Side::Right);
            }
        }
    }

    fn format_operand(&mut self, operand: &Expr, parent: BinaryOp, side: Side) {
        if needs_parens(operand, parent, side) {
            self.writer.write("(");
            self.format_expr(operand);
            self.writer.write(")");
        } else {
            self.format_expr(operand);
        }
    }

    // ========================================================================
    // Tree view
    // ========================================================================

    fn tree_program(&mut self, program: &Program) {
        self.writer.writeln(&NodeType::Program.to_string());
        self.writer.indent();
        for stmt in &program.body {
            self.tree_expr(stmt.expr());
        }
        self.writer.dedent();
    }

    fn tree_expr(&mut self, expr: &Expr) {
        let kind = expr.node_type();
        match expr {
            Expr::Number(value) => self.writer.writeln(&format!("{kind} {}", format_number(*value))),
            Expr::Ident(name) => self.writer.writeln(&format!("{kind} {name}")),
            Expr::Binary(left, op, right) => {
                self.writer.writeln(&format!("{kind} ({op})"));
                self.writer.indent();
                self.tree_expr(left);
                self.tree_expr(right);
                self.writer.dedent();
            }
        }
    }
}

/// Shortest text that parses back to the same value.
fn format_number(value: f64) -> String {
    value.to_string()
}

/// Whether `operand` must be wrapped to keep its shape under `parent`.
///
/// A looser operand always needs parentheses. An operand of equal precedence needs them only on the side the
/// operator does not associate toward, so `a - b - c` prints bare and `a - (b - c)` keeps its group.
fn needs_parens(operand: &Expr, parent: BinaryOp, side: Side) -> bool {
    let Expr::Binary(_, child, _) = operand else {
        return false;
    };
    match child.precedence().cmp(&parent.precedence()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => match parent.associativity() {
            Associativity::Left => side == Side::Right,
            Associativity::Right => side == Side::Left,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> Expr {
        Expr::number(v)
    }

    fn source_of(expr: Expr) -> String {
        let program = Program {
            body: vec![Stmt::Expr(expr)],
        };
        Formatter::new(&FormatConfig::new().with_style(OutputStyle::Source)).format(&program)
    }

    #[test]
    fn test_left_nested_same_precedence_prints_bare() {
        let expr = Expr::binary(Expr::binary(num(1.0), BinaryOp::Sub, num(2.0)), BinaryOp::Sub, num(3.0));
        assert_eq!(source_of(expr), "1 - 2 - 3\n");
    }

    #[test]
    fn test_right_nested_same_precedence_keeps_group() {
        let expr = Expr::binary(num(1.0), BinaryOp::Sub, Expr::binary(num(2.0), BinaryOp::Sub, num(3.0)));
        assert_eq!(source_of(expr), "1 - (2 - 3)\n");

        let expr = Expr::binary(num(8.0), BinaryOp::Div, Expr::binary(num(4.0), BinaryOp::Mul, num(2.0)));
        assert_eq!(source_of(expr), "8 / (4 * 2)\n");
    }

    #[test]
    fn test_looser_operand_gets_parens_on_either_side() {
        let sum = || Expr::binary(Expr::ident("a"), BinaryOp::Add, Expr::ident("b"));
        assert_eq!(source_of(Expr::binary(sum(), BinaryOp::Mul, num(2.0))), "(a + b) * 2\n");
        assert_eq!(source_of(Expr::binary(num(2.0), BinaryOp::Mod, sum())), "2 % (a + b)\n");
    }

    #[test]
    fn test_tighter_operand_prints_bare() {
        let product = Expr::binary(num(3.0), BinaryOp::Mul, num(4.0));
        assert_eq!(source_of(Expr::binary(num(2.0), BinaryOp::Add, product)), "2 + 3 * 4\n");
    }

    #[test]
    fn test_numbers_use_shortest_form() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_needs_parens_ignores_leaves() {
        assert!(!needs_parens(&Expr::ident("x"), BinaryOp::Mul, Side::Right));
        assert!(!needs_parens(&num(1.0), BinaryOp::Sub, Side::Left));
    }
}
