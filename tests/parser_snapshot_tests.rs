//! Snapshot tests for parser output
//!
//! Canonical renders, token streams and diagnostics are pinned as inline
//! snapshots so that any change to grouping or wording is reviewed.
//!
//! Run with: `cargo test --test parser_snapshot_tests`
//! Review changes: `cargo insta review`

use monkey::{lexer, parser};

fn render(source: &str) -> String {
    let output = parser::parse(source);
    assert!(!output.has_errors(), "unexpected errors: {:?}", output.errors);
    output.program.to_string()
}

fn errors(source: &str) -> String {
    parser::parse(source)
        .errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn tokens(source: &str) -> String {
    lexer::lex(source)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_precedence_renders() {
    insta::assert_snapshot!(render("-a*b"), @"((-a)*b)");
    insta::assert_snapshot!(render("!-a"), @"(!(-a))");
    insta::assert_snapshot!(render("a+b+c"), @"((a+b)+c)");
    insta::assert_snapshot!(render("a+b*c+d/e-f"), @"(((a+(b*c))+(d/e))-f)");
    insta::assert_snapshot!(render("3+4; -5*5"), @"(3+4)((-5)*5)");
    insta::assert_snapshot!(render("5>4==3<4"), @"((5>4)==(3<4))");
    insta::assert_snapshot!(render("3<5 == true"), @"((3<5)==true)");
}

#[test]
fn test_statement_renders() {
    insta::assert_snapshot!(render("let x = 5; let y = 10; let foobar = 838383;"), @"let x = 5;let y = 10;let foobar = 838383;");
    insta::assert_snapshot!(render("return 5; return 20;"), @"return 5;return 20;");
    insta::assert_snapshot!(render("let n = -(1 + 2) * 3 return n"), @"let n = ((-(1+2))*3);return n;");
}

#[test]
fn test_token_stream() {
    insta::assert_snapshot!(tokens("let x = a != !b;"), @r#"
    Token { kind: LET, literal: "let" }
    Token { kind: IDENT, literal: "x" }
    Token { kind: ASSIGN, literal: "=" }
    Token { kind: IDENT, literal: "a" }
    Token { kind: NOT_EQ, literal: "!=" }
    Token { kind: BANG, literal: "!" }
    Token { kind: IDENT, literal: "b" }
    Token { kind: SEMICOLON, literal: ";" }
    Token { kind: EOF, literal: "" }
    "#);
}

#[test]
fn test_error_messages() {
    insta::assert_snapshot!(errors("let 838383;"), @"expected next token to be IDENT, got INT instead");
    insta::assert_snapshot!(errors("(1+2"), @"expected next token to be RPAREN, got EOF instead");
    insta::assert_snapshot!(errors("let x = * 2; x @ y;"), @r"
    no prefix parse function for ASTERISK found
    illegal character '@'
    ");
}

#[test]
fn test_error_debug_form() {
    let output = parser::parse("let = 1;");
    insta::assert_debug_snapshot!(output.errors, @r#"
    [
        UnexpectedToken {
            expected: "IDENT",
            found: "ASSIGN",
            span: Span {
                start: 4,
                end: 5,
            },
        },
    ]
    "#);
}
