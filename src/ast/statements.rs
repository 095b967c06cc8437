use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::ast::{Expr, NodeKind, Stmt};

/// Program
/// The root of a parsed source, holding its statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Program
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

/// Variable Declaration
/// `let name;`, `let name = value;` or `const name = value;`.
///
/// A constant always has a value; the parser refuses to build one without.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDeclaration {
    pub is_constant: bool,
    pub identifier: String,
    pub value: Option<Expr>,
}
