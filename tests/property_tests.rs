//! Property-based tests for the Monkey front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use monkey::ast::{
    BooleanLiteral, Expression, Identifier, InfixExpression, IntegerLiteral, PrefixExpression, Statement,
};
use monkey::lexer::{self, TokenKind};
use monkey::parser;
use monkey_core::lang::keywords;
use monkey_core::lang::operators::OperatorId;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Identifiers: ASCII letters and `_`, never a reserved word.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z_]{0,7}".prop_filter("Not a keyword", |s| keywords::from_str(s).is_none())
}

fn leaf_strategy() -> impl Strategy<Value = Expression> {
    prop_oneof![
        ident_strategy().prop_map(|name| Expression::Identifier(Identifier::new(name))),
        (0..=i64::MAX).prop_map(|value| Expression::Integer(IntegerLiteral {
            value,
            literal: value.to_string(),
        })),
        any::<bool>().prop_map(|value| Expression::Boolean(BooleanLiteral {
            value,
            literal: value.to_string(),
        })),
    ]
}

fn prefix_op_strategy() -> impl Strategy<Value = OperatorId> {
    prop_oneof![Just(OperatorId::Bang), Just(OperatorId::Minus)]
}

fn infix_op_strategy() -> impl Strategy<Value = OperatorId> {
    prop_oneof![
        Just(OperatorId::Plus),
        Just(OperatorId::Minus),
        Just(OperatorId::Asterisk),
        Just(OperatorId::Slash),
        Just(OperatorId::Lt),
        Just(OperatorId::Gt),
        Just(OperatorId::EqEq),
        Just(OperatorId::NotEq),
    ]
}

/// Arbitrary expression trees, a handful of levels deep.
fn expr_strategy() -> impl Strategy<Value = Expression> {
    leaf_strategy().prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            (prefix_op_strategy(), inner.clone()).prop_map(|(operator, operand)| {
                Expression::Prefix(PrefixExpression {
                    operator,
                    operand: Box::new(operand),
                })
            }),
            (infix_op_strategy(), inner.clone(), inner).prop_map(|(operator, left, right)| {
                Expression::Infix(InfixExpression {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }),
        ]
    })
}

fn single_expression(source: &str) -> Result<Expression, String> {
    let program = parser::parse(source)
        .into_result()
        .map_err(|errs| format!("{:?}", errs))?;
    match <[Statement; 1]>::try_from(program.statements) {
        Ok([Statement::Expression(stmt)]) => Ok(stmt.expression),
        other => Err(format!("expected one expression statement, got {:?}", other)),
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: render → parse reproduces the same tree.
    #[test]
    fn render_then_parse_round_trips(expr in expr_strategy()) {
        let rendered = expr.to_string();
        let reparsed = single_expression(&rendered);
        prop_assert_eq!(reparsed, Ok(expr), "render was {}", rendered);
    }

    /// Property: rendering is a fixed point after one parse.
    #[test]
    fn render_is_idempotent(expr in expr_strategy()) {
        let once = expr.to_string();
        let twice = single_expression(&once).map(|e| e.to_string());
        prop_assert_eq!(twice, Ok(once));
    }

    /// Property: well-formed `let` programs yield one statement per `let`, names in order.
    #[test]
    fn let_count_matches_source(bindings in prop::collection::vec((ident_strategy(), expr_strategy()), 0..8)) {
        let source: String = bindings
            .iter()
            .map(|(name, value)| format!("let {} = {};\n", name, value))
            .collect();

        let program = parser::parse(&source).into_result();
        prop_assert!(program.is_ok(), "errors for {:?}: {:?}", source, program);
        let program = program.unwrap();

        prop_assert_eq!(program.statements.len(), bindings.len());
        for (stmt, (name, value)) in program.statements.iter().zip(&bindings) {
            match stmt {
                Statement::Let(l) => {
                    prop_assert_eq!(&l.name.name, name);
                    prop_assert_eq!(&l.value, value);
                }
                other => prop_assert!(false, "expected let statement, got {:?}", other),
            }
        }
    }

    /// Property: the lexer and parser never panic, and the token stream has exactly one trailing EOF.
    #[test]
    fn arbitrary_input_never_panics(source in any::<String>()) {
        let tokens = lexer::lex(&source);
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        let _ = parser::parse(&source);
    }

    /// Property: near-miss programs built from the language's own alphabet never panic either.
    #[test]
    fn monkey_alphabet_input_never_panics(source in "[a-z0-9 =+\\-!*/<>(){};,@\n]{0,96}") {
        let output = parser::parse(&source);
        if !output.has_errors() {
            // Anything accepted renders to something the lexer can read back
            let rendered = output.program.to_string();
            prop_assert_eq!(lexer::lex(&rendered).last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    /// Property: token literals concatenate back to the source minus whitespace.
    #[test]
    fn token_literals_cover_source(source in "[a-z0-9 =+\\-!*/<>(){};,\t\r\n]{0,96}") {
        let joined: String = lexer::lex(&source).iter().map(|t| t.literal.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(joined, stripped);
    }
}
