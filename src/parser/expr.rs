use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses a full expression, starting from the loosest tier.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_additive_expr(parser)
}

/// `+` and `-`, folded left over multiplicative operands.
pub fn parse_additive_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_tier(parser, BindingPower::Additive, parse_multiplicative_expr)
}

/// `*`, `/` and `%`, folded left over primary operands.
pub fn parse_multiplicative_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_tier(parser, BindingPower::Multiplicative, parse_primary_expr)
}

fn parse_binary_tier(
    parser: &mut Parser,
    bp: BindingPower,
    operand: fn(&mut Parser) -> Result<Expr, Error>,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;

    while let Some(operator) = parser.current_operator(bp) {
        parser.advance();
        let right = operand(parser)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();

    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(Error::unexpected(
            parser.current_token(),
            "unexpected token in expression",
        )),
    }
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect_error(TokenKind::Identifier, "unexpected token in expression")?;
    Ok(Expr::identifier(token.value))
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect_error(TokenKind::Number, "unexpected token in expression")?;

    match token.value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Expr::number(value)),
        _ => {
            let position = token.span.start.clone();
            Err(Error::new(ErrorImpl::NumberParseError { token }, position))
        }
    }
}

/// `( expr )`. The inner expression is returned without a wrapping node.
/// Fails once groups nest deeper than the configured limit.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.advance().clone();
    parser.enter_group(&open)?;

    let expr = parse_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, "expected closing parenthesis")?;
    parser.exit_group();

    Ok(expr)
}
