use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::ast::Expr;

/// Precedence tiers, loosest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
    Primary,
}

/// Binary Operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "%")]
    Modulo,
}

impl BinaryOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "%" => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }

    /// The precedence tier the operator belongs to.
    pub fn binding_power(&self) -> BindingPower {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => BindingPower::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => {
                BindingPower::Multiplicative
            }
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// LITERALS

/// Numeric Literal
/// The lexeme is converted to an `f64` when the node is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    pub value: f64,
}

/// Identifier
/// Represents a bare name in the AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub symbol: String,
}

// COMPLEX

/// Binary Expression
/// Both operands are owned exclusively by the expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub operator: BinaryOperator,
}

impl BinaryExpr {
    /// Moves any binary operands onto `pending`, leaving literal placeholders behind.
    fn detach_binary_operands(&mut self, pending: &mut Vec<Expr>) {
        for operand in [&mut self.left, &mut self.right] {
            if matches!(**operand, Expr::Binary(_)) {
                pending.push(std::mem::replace(&mut **operand, Expr::number(0.0)));
            }
        }
    }
}

// Long operator chains nest one level per operator; tear them down with a
// work list so dropping never recurses deeper than a single node.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_binary_operands(&mut pending);

        while let Some(mut expr) = pending.pop() {
            if let Expr::Binary(binary) = &mut expr {
                binary.detach_binary_operands(&mut pending);
            }
        }
    }
}
