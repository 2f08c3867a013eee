//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, cursor helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: `print` and `if` statements
//! - `expressions`: left-to-right operator folding and primaries
//!
//! Parser methods are split across files using `impl Parser` blocks. The
//! cursor only ever moves forward, and the first error aborts the parse.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::tables::{Keyword, Separator};
use std::fmt;

/// What went wrong while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A statement did not start with `print` or `if`
    InvalidStatement,
    /// `then` or `else` missing from an if statement
    ExpectedKeyword(Keyword),
    /// A parenthesis or brace missing from an if statement
    ExpectedSeparator(Separator),
    /// A primary expression was expected
    UnexpectedToken,
    /// The token sequence ended mid-construct
    IncompleteExpression,
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Offending token; `None` when the input ran out
    pub token: Option<Token>,
}

impl ParseError {
    pub fn message(&self) -> String {
        match &self.kind {
            ParseErrorKind::InvalidStatement => "Invalid statement".to_string(),
            ParseErrorKind::ExpectedKeyword(kw) => {
                format!("Expected {}", kw.as_str().to_uppercase())
            }
            ParseErrorKind::ExpectedSeparator(sep) => format!("Expected '{}'", sep),
            ParseErrorKind::UnexpectedToken => "Unexpected token".to_string(),
            ParseErrorKind::IncompleteExpression => "Incomplete expression".to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Some(token) if !token.location.is_known() => {
                write!(f, "Parse error: {}, found {}", self.message(), token)
            }
            Some(token) => write!(
                f,
                "Parse error at line {}, column {}: {}, found {}",
                token.location.line,
                token.location.column,
                self.message(),
                token
            ),
            None => write!(f, "Parse error: {}", self.message()),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a fully materialized token sequence
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser for tinyscript
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse statements until the tokens are exhausted
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let stmt = self.parse_statement()?;
            program.statements.push(stmt);
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Current token, or `IncompleteExpression` past the end
    pub(crate) fn current(&self) -> ParseResult<&Token> {
        self.peek().ok_or(ParseError {
            kind: ParseErrorKind::IncompleteExpression,
            token: None,
        })
    }

    pub(crate) fn advance(&mut self) -> ParseResult<Token> {
        let token = self.current()?.clone();
        self.position += 1;
        Ok(token)
    }

    pub(crate) fn error_at_current(&self, kind: ParseErrorKind) -> ParseError {
        match self.peek() {
            Some(token) => ParseError {
                kind,
                token: Some(token.clone()),
            },
            None => ParseError {
                kind: ParseErrorKind::IncompleteExpression,
                token: None,
            },
        }
    }

    pub(crate) fn expect_keyword(&mut self, kw: Keyword) -> ParseResult<Token> {
        if self.current()?.is_keyword(kw) {
            self.advance()
        } else {
            Err(self.error_at_current(ParseErrorKind::ExpectedKeyword(kw)))
        }
    }

    pub(crate) fn expect_separator(&mut self, sep: Separator) -> ParseResult<Token> {
        if self.current()?.is_separator(sep) {
            self.advance()
        } else {
            Err(self.error_at_current(ParseErrorKind::ExpectedSeparator(sep)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::{tokenize, TokenKind};

    fn parse_str(source: &str) -> ParseResult<Program> {
        parse(tokenize(source).unwrap())
    }

    #[test]
    fn test_parse_print() {
        let program = parse_str("print x").unwrap();

        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Statement::Print { expr, .. } => {
                assert!(matches!(expr, Expr::Identifier { name, .. } if name == "x"));
            }
            _ => panic!("Expected print statement"),
        }
    }

    #[test]
    fn test_parse_empty() {
        let program = parse(Vec::new()).unwrap();

        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_invalid_statement_reports_token() {
        let err = parse_str("42").unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::InvalidStatement);
        assert_eq!(err.token.map(|t| t.text), Some("42".to_string()));
    }

    #[test]
    fn test_error_display() {
        let err = parse(vec![Token::at(
            TokenKind::Literal,
            "42",
            SourceLocation::new(3, 5),
        )])
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Parse error at line 3, column 5: Invalid statement, found Token(type=LITERAL, value=42)"
        );
    }

    #[test]
    fn test_error_display_without_position() {
        let err = parse(vec![Token::new(TokenKind::Separator, "}")]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Parse error: Invalid statement, found Token(type=SEPARATOR, value=})"
        );
    }

    #[test]
    fn test_incomplete_display() {
        let err = parse_str("print").unwrap_err();

        assert_eq!(err.kind, ParseErrorKind::IncompleteExpression);
        assert_eq!(err.to_string(), "Parse error: Incomplete expression");
    }

    #[test]
    fn test_expected_keyword_message() {
        let err = ParseError {
            kind: ParseErrorKind::ExpectedKeyword(Keyword::Then),
            token: None,
        };

        assert_eq!(err.message(), "Expected THEN");
    }
}
