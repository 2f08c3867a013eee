//! tinyscript source code parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`tables`]: Character-class and keyword tables
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions and the `ASTNode(...)` rendering
//!
//! # Language
//!
//! ```text
//! program    ::= statement*
//! statement  ::= "print" expression | if_stmt
//! if_stmt    ::= "if" "(" expression ")" "then" "{" statement "}" "else" "{" statement "}"
//! expression ::= primary (operator primary)*
//! primary    ::= identifier | literal
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser. Binary operators have no
//! precedence and fold strictly left to right. The first error aborts the
//! whole parse; there is no recovery.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod tables;

mod expressions;
mod statements;

use std::fmt;

use ast::Program;
use lexer::LexError;
use parse::ParseError;

/// Either stage's failure, for callers that go straight from text to tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Lex(err) => write!(f, "{}", err),
            SyntaxError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Lex(err) => Some(err),
            SyntaxError::Parse(err) => Some(err),
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        SyntaxError::Lex(err)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        SyntaxError::Parse(err)
    }
}

/// Tokenize and parse `source` in one call
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lexer::tokenize(source)?;
    Ok(parse::parse(tokens)?)
}
