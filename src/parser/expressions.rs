//! Expression parsing implementation
//!
//! ```text
//! expression ::= primary (operator primary)*
//! primary    ::= identifier | literal
//! ```
//!
//! There is no precedence: every operator binds equally and the chain is
//! folded left to right, so `1 + 2 * 3` means `(1 + 2) * 3`.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseErrorKind, ParseResult, Parser};
use crate::parser::tables::Quote;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;

        while self.peek().map(|t| t.kind) == Some(TokenKind::Operator) {
            let token = self.advance()?;
            let right = self.parse_primary()?;
            left = Expr::BinaryOp {
                op: BinOp::from_text(&token.text),
                left: Box::new(left),
                right: Box::new(right),
                location: token.location,
            };
        }

        Ok(left)
    }

    /// Parse an identifier or literal leaf
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let kind = self.current()?.kind;
        match kind {
            TokenKind::Identifier => {
                let token = self.advance()?;
                Ok(Expr::Identifier {
                    name: token.text,
                    location: token.location,
                })
            }
            TokenKind::Literal => {
                let token = self.advance()?;
                let quoted = token.text.chars().next().and_then(Quote::from_char);
                let kind = if quoted.is_some() {
                    LiteralKind::String
                } else {
                    LiteralKind::Number
                };
                Ok(Expr::Literal {
                    kind,
                    text: token.text,
                    location: token.location,
                })
            }
            _ => Err(self.error_at_current(ParseErrorKind::UnexpectedToken)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::{tokenize, Token, TokenKind};
    use crate::parser::parse::{parse, ParseErrorKind};

    fn first_expr(program: &Program) -> &Expr {
        match &program.statements[0] {
            Statement::Print { expr, .. } => expr,
            _ => panic!("Expected print statement"),
        }
    }

    #[test]
    fn test_left_associative_fold() {
        let program = parse(tokenize("print 1 + 2 * 3").unwrap()).unwrap();

        match first_expr(&program) {
            Expr::BinaryOp {
                op: BinOp::Mul,
                left,
                right,
                ..
            } => {
                assert!(matches!(**left, Expr::BinaryOp { op: BinOp::Add, .. }));
                assert!(matches!(**right, Expr::Literal { ref text, .. } if text == "3"));
            }
            other => panic!("Expected '*' at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_kinds() {
        let program = parse(tokenize("print 'hi' = 4.5").unwrap()).unwrap();

        match first_expr(&program) {
            Expr::BinaryOp { left, right, .. } => {
                assert!(matches!(**left, Expr::Literal { kind: LiteralKind::String, .. }));
                assert!(matches!(**right, Expr::Literal { kind: LiteralKind::Number, .. }));
            }
            other => panic!("Expected binary op, got {:?}", other),
        }
    }

    #[test]
    fn test_keyword_is_not_a_primary() {
        let err = parse(tokenize("print then").unwrap()).unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
        assert_eq!(err.token.map(|t| t.text), Some("then".to_string()));
    }

    #[test]
    fn test_dangling_operator() {
        let tokens = vec![
            Token::new(TokenKind::Keyword, "print"),
            Token::new(TokenKind::Literal, "1"),
            Token::new(TokenKind::Operator, "+"),
        ];
        let err = parse(tokens).unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::IncompleteExpression);
    }

    #[test]
    fn test_unlisted_operator_still_folds() {
        let tokens = vec![
            Token::new(TokenKind::Keyword, "print"),
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Operator, ">="),
            Token::new(TokenKind::Identifier, "b"),
            Token::new(TokenKind::Operator, "+"),
            Token::new(TokenKind::Literal, "1"),
        ];
        let program = parse(tokens).unwrap();

        match first_expr(&program) {
            Expr::BinaryOp { op: BinOp::Add, left, .. } => match &**left {
                Expr::BinaryOp { op, .. } => assert_eq!(*op, BinOp::Other(">=".to_string())),
                other => panic!("Expected '>=' on the left, got {:?}", other),
            },
            other => panic!("Expected '+' at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_expression_stops_at_non_operator() {
        let program = parse(tokenize("print a print b").unwrap()).unwrap();

        assert_eq!(program.statements.len(), 2);
    }
}
