//! Renders a tree back to source form.
//!
//! Output uses one statement per line and only the parentheses that
//! precedence and left-associativity require, so re-parsing the text of a
//! parsed program gives back an identical tree.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{BinaryExpr, BindingPower, Identifier, NumericLiteral},
    statements::VarDeclaration,
};

impl Expr {
    fn binding_power(&self) -> BindingPower {
        match self {
            Expr::Binary(binary) => binary.operator.binding_power(),
            Expr::Identifier(_) | Expr::NumericLiteral(_) => BindingPower::Primary,
        }
    }
}

fn write_operand(f: &mut Formatter<'_>, operand: &Expr, parent: BindingPower, is_right: bool) -> Result {
    let operand_bp = operand.binding_power();
    // Equal tiers on the right only arise from explicit grouping.
    let grouped = operand_bp < parent || (is_right && operand_bp == parent);

    if grouped {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bp = self.operator.binding_power();
        write_operand(f, &self.left, bp, false)?;
        write!(f, " {} ", self.operator)?;
        write_operand(f, &self.right, bp, true)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.symbol)
    }
}

impl Display for NumericLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Binary(binary) => Display::fmt(binary, f),
            Expr::Identifier(identifier) => Display::fmt(identifier, f),
            Expr::NumericLiteral(literal) => Display::fmt(literal, f),
        }
    }
}

impl Display for VarDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let keyword = if self.is_constant { "const" } else { "let" };

        match &self.value {
            Some(value) => write!(f, "{} {} = {};", keyword, self.identifier, value),
            None => write!(f, "{} {};", keyword, self.identifier),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::VarDeclaration(declaration) => Display::fmt(declaration, f),
            Stmt::Expr(expr) => Display::fmt(expr, f),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (index, stmt) in self.body.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}
