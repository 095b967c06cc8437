use serde::{Deserialize, Serialize};

use super::{
    expressions::{BinaryExpr, BinaryOperator, Identifier, NumericLiteral},
    statements::VarDeclaration,
};

pub use super::statements::Program;

/// Node Kinds
///
/// The fixed discriminator of every node variant, including the `Program` root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    VarDeclaration,
    BinaryExpr,
    Identifier,
    NumericLiteral,
}

/// Statement
///
/// Every top-level item of a program. Expressions are statements too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    VarDeclaration(VarDeclaration),
    Expr(Expr),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::VarDeclaration(_) => NodeKind::VarDeclaration,
            Stmt::Expr(expr) => expr.kind(),
        }
    }

    /// Returns the expression if this statement is one.
    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Stmt::Expr(expr) => Some(expr),
            Stmt::VarDeclaration(_) => None,
        }
    }
}

impl From<VarDeclaration> for Stmt {
    fn from(declaration: VarDeclaration) -> Self {
        Stmt::VarDeclaration(declaration)
    }
}

impl From<Expr> for Stmt {
    fn from(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary(_) => NodeKind::BinaryExpr,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::NumericLiteral(_) => NodeKind::NumericLiteral,
        }
    }

    pub fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        })
    }

    pub fn identifier(symbol: impl Into<String>) -> Self {
        Expr::Identifier(Identifier {
            symbol: symbol.into(),
        })
    }

    pub fn number(value: f64) -> Self {
        Expr::NumericLiteral(NumericLiteral { value })
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<Identifier> for Expr {
    fn from(expr: Identifier) -> Self {
        Expr::Identifier(expr)
    }
}

impl From<NumericLiteral> for Expr {
    fn from(expr: NumericLiteral) -> Self {
        Expr::NumericLiteral(expr)
    }
}
