//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= "print" expression
//!             | if_stmt
//! if_stmt   ::= "if" "(" expression ")" "then" "{" statement "}"
//!               "else" "{" statement "}"
//! ```
//!
//! Each branch body holds exactly one statement. All parsing methods are
//! implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{ParseErrorKind, ParseResult, Parser};
use crate::parser::tables::{Keyword, Separator};

impl Parser {
    /// Parse a statement, dispatching on its leading keyword
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current()?.keyword() {
            Some(Keyword::Print) => self.parse_print_statement(),
            Some(Keyword::If) => self.parse_if_statement(),
            _ => Err(self.error_at_current(ParseErrorKind::InvalidStatement)),
        }
    }

    /// Parse `print expression`; no delimiter follows the expression
    fn parse_print_statement(&mut self) -> ParseResult<Statement> {
        let loc = self.expect_keyword(Keyword::Print)?.location;
        let expr = self.parse_expression()?;

        Ok(Statement::Print {
            expr,
            location: loc,
        })
    }

    /// Parse if statement with mandatory else branch
    fn parse_if_statement(&mut self) -> ParseResult<Statement> {
        let loc = self.expect_keyword(Keyword::If)?.location;

        self.expect_separator(Separator::LParen)?;
        let condition = self.parse_expression()?;
        self.expect_separator(Separator::RParen)?;

        self.expect_keyword(Keyword::Then)?;
        let then_branch = Box::new(self.parse_branch_body()?);

        self.expect_keyword(Keyword::Else)?;
        let else_branch = Box::new(self.parse_branch_body()?);

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    /// `{ statement }`
    fn parse_branch_body(&mut self) -> ParseResult<Statement> {
        self.expect_separator(Separator::LBrace)?;
        let stmt = self.parse_statement()?;
        self.expect_separator(Separator::RBrace)?;
        Ok(stmt)
    }
}
