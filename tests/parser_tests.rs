// Integration tests for the parser, from tokens and from source text

use std::fs;
use std::path::Path;

use tinyscript::parser::ast::{BinOp, Expr, Node, Statement};
use tinyscript::parser::lexer::{tokenize, LexErrorKind, Token, TokenKind};
use tinyscript::parser::parse::{parse, ParseErrorKind, Parser};
use tinyscript::parser::parse_source;
use tinyscript::parser::SyntaxError;

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

#[test]
fn test_left_associativity_from_tokens() {
    let tokens = vec![
        tok(TokenKind::Keyword, "print"),
        tok(TokenKind::Literal, "1"),
        tok(TokenKind::Operator, "+"),
        tok(TokenKind::Literal, "2"),
        tok(TokenKind::Operator, "*"),
        tok(TokenKind::Literal, "3"),
    ];
    let program = parse(tokens).expect("Parsing failed");

    assert_eq!(
        program.to_string(),
        "ASTNode(value=Program, children=[ASTNode(value=Print, children=[\
         ASTNode(value=*, children=[\
         ASTNode(value=+, children=[ASTNode(value=LITERAL(1), children=[]), ASTNode(value=LITERAL(2), children=[])]), \
         ASTNode(value=LITERAL(3), children=[])])])])"
    );
}

#[test]
fn test_if_statement_shape() {
    let tokens = vec![
        tok(TokenKind::Keyword, "if"),
        tok(TokenKind::Separator, "("),
        tok(TokenKind::Identifier, "x"),
        tok(TokenKind::Separator, ")"),
        tok(TokenKind::Keyword, "then"),
        tok(TokenKind::Separator, "{"),
        tok(TokenKind::Keyword, "print"),
        tok(TokenKind::Identifier, "x"),
        tok(TokenKind::Separator, "}"),
        tok(TokenKind::Keyword, "else"),
        tok(TokenKind::Separator, "{"),
        tok(TokenKind::Keyword, "print"),
        tok(TokenKind::Identifier, "x"),
        tok(TokenKind::Separator, "}"),
    ];
    let program = parse(tokens).expect("Parsing failed");

    let root = program.as_node();
    assert_eq!(root.label(), "Program");
    let children = root.children();
    assert_eq!(children.len(), 1);

    let if_node = children[0];
    assert_eq!(if_node.label(), "If");
    let labels: Vec<String> = if_node.children().iter().map(Node::label).collect();
    assert_eq!(labels, vec!["IDENTIFIER(x)", "Print", "Print"]);
}

#[test]
fn test_leading_literal_is_invalid_statement() {
    let tokens = vec![
        tok(TokenKind::Literal, "42"),
        tok(TokenKind::Keyword, "print"),
        tok(TokenKind::Identifier, "x"),
    ];
    let err = parse(tokens).unwrap_err();

    assert_eq!(err.kind, ParseErrorKind::InvalidStatement);
    assert_eq!(err.token, Some(tok(TokenKind::Literal, "42")));
}

#[test]
fn test_parser_struct_entry_point() {
    let tokens = tokenize("print a = b").unwrap();
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program().expect("Parsing failed");

    match &program.statements[0] {
        Statement::Print {
            expr: Expr::BinaryOp { op, .. },
            ..
        } => assert_eq!(*op, BinOp::Eq),
        other => panic!("Expected print of a comparison, got {:?}", other),
    }
}

#[test]
fn test_parse_source_reports_lex_errors() {
    match parse_source("print 1.2.3") {
        Err(SyntaxError::Lex(err)) => {
            assert_eq!(err.kind, LexErrorKind::InvalidLiteral("1.2.".to_string()))
        }
        other => panic!("Expected lex error, got {:?}", other),
    }
}

#[test]
fn test_parse_source_reports_parse_errors() {
    match parse_source("if (x) then { print 1 }") {
        Err(SyntaxError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::IncompleteExpression)
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let source = "print a - b - c if (a) then { print 'y' } else { print 'n' }";

    assert_eq!(parse_source(source).unwrap(), parse_source(source).unwrap());
}

#[test]
fn test_branching_demo() {
    let path = Path::new("demos/branching.tiny");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let program = parse_source(&source).expect("Parsing failed");

    assert_eq!(program.statements.len(), 3);
    let tree = program.as_node().render_tree();
    assert_eq!(tree[0], "Program");
    assert!(tree.contains(&"    <>".to_string()));
    assert!(tree.iter().any(|line| line.trim() == "LITERAL(\"nonzero\")"));
    assert!(tree.iter().any(|line| line.trim() == "<="));
}

#[test]
fn test_bad_number_demo() {
    let path = Path::new("demos/bad_number.tiny");
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let err = parse_source(&source).unwrap_err();
    assert!(err.to_string().starts_with("Lexer error at line 1, column 7"));
}
