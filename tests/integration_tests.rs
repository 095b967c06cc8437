//! Integration tests for the public parsing entry points.
//!
//! These run source text through the scanner and parser and check the
//! resulting trees and errors from outside the crate.

use exprlang::{
    ast::{
        ast::{Expr, NodeKind, Stmt},
        expressions::BinaryOperator,
        statements::VarDeclaration,
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse, parse_with_config, OperatorMatching, ParserConfig,
};

/// Evaluates an expression the way a downstream consumer would, matching
/// every node kind exhaustively.
fn evaluate(expr: &Expr, lookup: &dyn Fn(&str) -> f64) -> f64 {
    match expr {
        Expr::NumericLiteral(literal) => literal.value,
        Expr::Identifier(identifier) => lookup(&identifier.symbol),
        Expr::Binary(binary) => {
            let left = evaluate(&binary.left, lookup);
            let right = evaluate(&binary.right, lookup);
            match binary.operator {
                BinaryOperator::Add => left + right,
                BinaryOperator::Subtract => left - right,
                BinaryOperator::Multiply => left * right,
                BinaryOperator::Divide => left / right,
                BinaryOperator::Modulo => left % right,
            }
        }
    }
}

fn no_variables(name: &str) -> f64 {
    panic!("unexpected variable `{}`", name)
}

fn evaluate_source(source: &str) -> f64 {
    let program = parse(source).unwrap();
    let expr = program.body[0].as_expr().unwrap();
    evaluate(expr, &no_variables)
}

#[test]
fn test_precedence_through_evaluation() {
    assert_eq!(evaluate_source("1 + 2 * 3"), 7.0);
    assert_eq!(evaluate_source("(1 + 2) * 3"), 9.0);
    assert_eq!(evaluate_source("10 - 4 - 3"), 3.0);
    assert_eq!(evaluate_source("100 / 10 / 5"), 2.0);
    assert_eq!(evaluate_source("17 % 5 * 2"), 4.0);
    assert_eq!(evaluate_source("2 * (3 + 4) - 6 / (1 + 2)"), 12.0);
}

#[test]
fn test_program_with_declarations() {
    let source = "
        // inputs
        let width = 4;
        let height;
        const area = width * 2.5;
        area + width
    ";
    let program = parse(source).unwrap();

    assert_eq!(program.len(), 4);
    assert_eq!(
        program.body[1],
        Stmt::VarDeclaration(VarDeclaration {
            is_constant: false,
            identifier: "height".to_string(),
            value: None,
        })
    );

    let kinds: Vec<NodeKind> = program.iter().map(|stmt| stmt.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::VarDeclaration,
            NodeKind::VarDeclaration,
            NodeKind::VarDeclaration,
            NodeKind::BinaryExpr,
        ]
    );
}

#[test]
fn test_independent_parses() {
    let first = parse("let x = 1;").unwrap();
    let second = parse("let x = 1;").unwrap();
    let third = parse("x").unwrap();

    assert_eq!(first, second);
    assert_ne!(first, third);
}

#[test]
fn test_errors_report_offending_token() {
    let error = parse("let x = (1 + 2;").unwrap_err();

    assert_eq!(error.message(), "expected closing parenthesis");
    assert_eq!(error.token().unwrap().kind, TokenKind::Semicolon);
    assert_eq!(error.get_position().0, 14);
    assert_eq!(error.get_position().1.as_str(), "shell");
}

#[test]
fn test_scanner_errors_surface_through_parse() {
    let error = parse("let x = 1 $ 2;").unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_const_requires_initializer() {
    let error = parse("let a; const b;").unwrap_err();
    assert_eq!(error.message(), "constant must have an initializer");
}

#[test]
fn test_configured_parse() {
    let config = ParserConfig {
        file: Some("calc.lang".to_string()),
        operator_matching: OperatorMatching::TokenKind,
        ..ParserConfig::default()
    };

    let program = parse_with_config("const c = 3 * (a + b);", &config).unwrap();
    assert_eq!(program.to_string(), "const c = 3 * (a + b);");

    let tokens = tokenize("a", config.file.clone()).unwrap();
    assert_eq!(tokens[0].span.start.1.as_str(), "calc.lang");
}
