//! # Introduction
//!
//! tinyscript turns source text in a small imperative scripting language into
//! an abstract syntax tree, ready for a later evaluator or compiler.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → (printer | TUI)
//! ```
//!
//! 1. [`parser::lexer`] — classifies characters against the fixed tables in
//!    [`parser::tables`] and produces [`parser::lexer::Token`]s.
//! 2. [`parser::parse`] — recursive descent over the token sequence, building a
//!    [`parser::ast::Program`].
//! 3. [`parser::ast`] — the typed tree plus a uniform label/children view used
//!    for `ASTNode(value=..., children=[...])` rendering.
//! 4. [`ui`] — ratatui-based viewer for source, tokens and tree; not part of the
//!    stable library API.
//!
//! ## Language
//!
//! Statements: `print <expr>` and
//! `if (<expr>) then { <stmt> } else { <stmt> }`. Expressions are identifiers
//! and literals joined by operators, folded left to right with no precedence.
//!
//! ```
//! use tinyscript::parser::parse_source;
//!
//! let program = parse_source("print 1 + 2 * 3").unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod parser;
pub mod ui;
