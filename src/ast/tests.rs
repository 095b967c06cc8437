//! Unit tests for the AST module: node kinds, printing and serialization.

use crate::parse;

use super::{
    ast::{Expr, NodeKind, Program, Stmt},
    expressions::{BinaryOperator, BindingPower},
    statements::VarDeclaration,
};

#[test]
fn test_node_kinds() {
    let binary = Expr::binary(Expr::number(1.0), BinaryOperator::Add, Expr::identifier("x"));
    let declaration = Stmt::VarDeclaration(VarDeclaration {
        is_constant: true,
        identifier: "y".to_string(),
        value: Some(Expr::number(2.0)),
    });

    assert_eq!(binary.kind(), NodeKind::BinaryExpr);
    assert_eq!(Expr::identifier("x").kind(), NodeKind::Identifier);
    assert_eq!(Expr::number(3.0).kind(), NodeKind::NumericLiteral);
    assert_eq!(Stmt::from(binary).kind(), NodeKind::BinaryExpr);
    assert_eq!(declaration.kind(), NodeKind::VarDeclaration);
    assert_eq!(Program::default().kind(), NodeKind::Program);
}

#[test]
fn test_binary_operator_lexemes() {
    for lexeme in ["+", "-", "*", "/", "%"] {
        let operator = BinaryOperator::from_lexeme(lexeme).unwrap();
        assert_eq!(operator.as_str(), lexeme);
    }
    assert_eq!(BinaryOperator::from_lexeme("="), None);
    assert_eq!(BinaryOperator::from_lexeme("**"), None);
}

#[test]
fn test_print_declarations() {
    let program = parse("let a; let b = 1; const c = b * 2.5;").unwrap();
    assert_eq!(program.to_string(), "let a;\nlet b = 1;\nconst c = b * 2.5;");
}

#[test]
fn test_print_minimal_parentheses() {
    let cases = [
        ("1 + 2 * 3", "1 + 2 * 3"),
        ("(1 + 2) * 3", "(1 + 2) * 3"),
        ("(a - b) - c", "a - b - c"),
        ("a - (b - c)", "a - (b - c)"),
        ("a / (b * c)", "a / (b * c)"),
        ("((x))", "x"),
        ("(a * b) + (c % d)", "a * b + c % d"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse(source).unwrap().to_string(), expected, "printing {:?}", source);
    }
}

#[test]
fn test_reparse_printed_program() {
    let sources = [
        "let total = (price + tax) * quantity - discount;",
        "const ratio = a / (b / c) % 7;",
        "x (y) let z; 10 - (2 - 3) - 4",
        "",
    ];

    for source in sources {
        let program = parse(source).unwrap();
        let reparsed = parse(&program.to_string()).unwrap();
        assert_eq!(program, reparsed, "round trip of {:?}", source);
    }
}

#[test]
fn test_serialize_program() {
    let program = parse("const x = 1 + y;").unwrap();
    let json = serde_json::to_value(&program).unwrap();

    assert_eq!(json["body"][0]["VarDeclaration"]["is_constant"], true);
    assert_eq!(json["body"][0]["VarDeclaration"]["value"]["Binary"]["operator"], "+");

    let restored: Program = serde_json::from_value(json).unwrap();
    assert_eq!(restored, program);
}

#[test]
fn test_binding_power_tiers() {
    assert!(BinaryOperator::Add.binding_power() < BinaryOperator::Multiply.binding_power());
    assert_eq!(BinaryOperator::Subtract.binding_power(), BindingPower::Additive);
    assert_eq!(BinaryOperator::Modulo.binding_power(), BindingPower::Multiplicative);
    assert!(BindingPower::Multiplicative < BindingPower::Primary);
}

#[test]
fn test_drop_long_operator_chain() {
    let source = vec!["1"; 100_000].join(" + ");
    let program = parse(&source).unwrap();

    assert_eq!(program.len(), 1);
    assert_eq!(program.body[0].kind(), NodeKind::BinaryExpr);
    drop(program);
}

#[test]
fn test_drop_built_chain() {
    let mut expr = Expr::identifier("x");
    for _ in 0..100_000 {
        expr = Expr::binary(expr, BinaryOperator::Multiply, Expr::number(2.0));
    }

    drop(Stmt::Expr(expr));
}

#[test]
fn test_drop_keeps_operands_until_tree_is_dropped() {
    let expr = Expr::binary(
        Expr::binary(Expr::number(1.0), BinaryOperator::Add, Expr::number(2.0)),
        BinaryOperator::Multiply,
        Expr::identifier("y"),
    );
    let copy = expr.clone();
    drop(copy);

    assert_eq!(expr.to_string(), "(1 + 2) * y");
}
