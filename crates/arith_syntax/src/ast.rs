//! Abstract Syntax Tree definitions for arith
//!
//! The tree is closed: a [`Program`] holds statements, every statement is an expression statement, and every
//! expression is a number, an identifier, or a binary operation over one of the five supported operators.
//!
//! Nodes carry no source positions. Two inputs that differ only in whitespace or redundant parentheses parse to
//! equal trees; positions live on tokens and diagnostics instead.

use std::fmt;

use arith_core::lang::operators::{self, Associativity, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Byte length; an inverted span (`end < start`) is empty.
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Identifier name
pub type Ident = String;

/// The root of every parse: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// Anything usable as a top-level body element.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A bare expression used as a statement.
    Expr(Expr),
}

impl Stmt {
    /// The expression this statement evaluates.
    pub fn expr(&self) -> &Expr {
        match self {
            Stmt::Expr(expr) => expr,
        }
    }
}

/// Expressions yield a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Ident(Ident),
    /// `left op right`; children are owned exclusively by their parent.
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    pub fn ident(name: impl Into<Ident>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(Box::new(left), op, Box::new(right))
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Expr::Number(_) => NodeType::NumberLiteral,
            Expr::Ident(_) => NodeType::Identifier,
            Expr::Binary(..) => NodeType::BinaryExpression,
        }
    }
}

/// Name of every node variant, as shown by tree printers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Program,
    NumberLiteral,
    Identifier,
    BinaryExpression,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Program => write!(f, "Program"),
            NodeType::NumberLiteral => write!(f, "NumberLiteral"),
            NodeType::Identifier => write!(f, "Identifier"),
            NodeType::BinaryExpression => write!(f, "BinaryExpression"),
        }
    }
}

/// The binary operators the grammar supports.
///
/// ## Notes
/// - This is a strict subset of [`OperatorId`]: reserved operators such as `^` have no variant, so a
///   [`Expr::Binary`] can never carry them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod];

    /// Registry id of the operator token this variant is parsed from.
    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
        }
    }

    /// Map an operator token to a supported binary operator; `None` for reserved operators.
    pub fn from_operator_id(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::Plus => Some(BinaryOp::Add),
            OperatorId::Minus => Some(BinaryOp::Sub),
            OperatorId::Star => Some(BinaryOp::Mul),
            OperatorId::Slash => Some(BinaryOp::Div),
            OperatorId::Percent => Some(BinaryOp::Mod),
            OperatorId::Caret => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        operators::as_str(self.operator_id())
    }

    pub fn precedence(self) -> u8 {
        operators::info_for(self.operator_id()).precedence
    }

    pub fn associativity(self) -> Associativity {
        operators::info_for(self.operator_id()).associativity
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_round_trips_through_operator_id() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_operator_id(op.operator_id()), Some(op));
        }
        assert_eq!(BinaryOp::from_operator_id(OperatorId::Caret), None);
    }

    #[test]
    fn test_binary_op_display() {
        let rendered: Vec<String> = BinaryOp::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(rendered, ["+", "-", "*", "/", "%"]);
    }

    #[test]
    fn test_node_type() {
        assert_eq!(Expr::number(1.0).node_type(), NodeType::NumberLiteral);
        assert_eq!(Expr::ident("x").node_type(), NodeType::Identifier);
        let sum = Expr::binary(Expr::number(1.0), BinaryOp::Add, Expr::ident("x"));
        assert_eq!(sum.node_type().to_string(), "BinaryExpression");
    }

    #[test]
    fn test_span_merge() {
        let span = Span::new(4, 6).merge(Span::new(0, 2));
        assert_eq!(span, Span::new(0, 6));
        assert_eq!(span.len(), 6);
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_inverted_span_is_empty() {
        let span = Span::new(5, 2);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }
}
