use tracing::trace;

use crate::{
    ast::{ast::Stmt, statements::VarDeclaration},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one statement: a declaration when a handler is registered for the
/// current token, otherwise a bare expression.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();

    if let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() {
        trace!(%kind, "dispatching statement");
        return handler(parser);
    }

    trace!(%kind, "parsing expression statement");
    Ok(Stmt::Expr(parse_expr(parser)?))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::VarDeclaration(parse_var_declaration(parser)?))
}

/// `let name;`, `let name = expr;` or `const name = expr;`
pub fn parse_var_declaration(parser: &mut Parser) -> Result<VarDeclaration, Error> {
    let is_constant = parser.advance().kind == TokenKind::Const;

    let identifier = parser
        .expect_error(TokenKind::Identifier, "expected identifier after declaration keyword")?
        .value;

    if parser.current_token_kind() == TokenKind::Semicolon {
        let semicolon = parser.advance().clone();

        if is_constant {
            return Err(Error::unexpected(&semicolon, "constant must have an initializer"));
        }

        return Ok(VarDeclaration {
            is_constant: false,
            identifier,
            value: None,
        });
    }

    parser.expect_error(TokenKind::Equals, "expected '=' after identifier")?;
    let value = parse_expr(parser)?;
    parser.expect_error(TokenKind::Semicolon, "declaration must end with ';'")?;

    Ok(VarDeclaration {
        is_constant,
        identifier,
        value: Some(value),
    })
}
