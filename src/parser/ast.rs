// AST (Abstract Syntax Tree) definitions for tinyscript

use super::tables::Operator;
use std::fmt;

/// Source location information for error reporting.
///
/// Lines and columns are 1-based; the default `0:0` means "no position".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// False for the default location of hand-built tokens
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

/// Binary operators, one per entry of the operator table.
///
/// `Other` keeps the text of an Operator token outside the table, which can
/// only arrive through a hand-built token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Other(String),
}

impl BinOp {
    /// Classify an Operator token's text
    pub fn from_text(text: &str) -> Self {
        match Operator::lookup(text) {
            Some(op) => BinOp::from(op),
            None => BinOp::Other(text.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            BinOp::Add => Operator::Plus.as_str(),
            BinOp::Sub => Operator::Minus.as_str(),
            BinOp::Mul => Operator::Times.as_str(),
            BinOp::Div => Operator::Divide.as_str(),
            BinOp::Eq => Operator::Equals.as_str(),
            BinOp::Ne => Operator::NotEq.as_str(),
            BinOp::Lt => Operator::Lt.as_str(),
            BinOp::Le => Operator::Le.as_str(),
            BinOp::Gt => Operator::Gt.as_str(),
            BinOp::Other(text) => text,
        }
    }
}

impl From<Operator> for BinOp {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Plus => BinOp::Add,
            Operator::Minus => BinOp::Sub,
            Operator::Times => BinOp::Mul,
            Operator::Divide => BinOp::Div,
            Operator::Equals => BinOp::Eq,
            Operator::NotEq => BinOp::Ne,
            Operator::Lt => BinOp::Lt,
            Operator::Le => BinOp::Le,
            Operator::Gt => BinOp::Gt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String, // raw text keeps its quotes
}

/// Expressions: operands folded strictly left to right
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier {
        name: String,
        location: SourceLocation,
    },
    Literal {
        kind: LiteralKind,
        text: String,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Identifier { location, .. }
            | Expr::Literal { location, .. }
            | Expr::BinaryOp { location, .. } => *location,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Print {
        expr: Expr,
        location: SourceLocation,
    },
    If {
        condition: Expr,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
        location: SourceLocation,
    },
}

impl Statement {
    pub fn location(&self) -> SourceLocation {
        match self {
            Statement::Print { location, .. } | Statement::If { location, .. } => *location,
        }
    }
}

/// Root of the tree: statements in source order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Program(self)
    }
}

/// Uniform label-and-children view over the typed tree.
///
/// Labels: `Program`, `If`, `Print`, the operator symbol for binary
/// operations, and `IDENTIFIER(name)` / `LITERAL(text)` for leaves.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expr(&'a Expr),
}

impl<'a> Node<'a> {
    pub fn label(&self) -> String {
        match self {
            Node::Program(_) => "Program".to_string(),
            Node::Statement(Statement::Print { .. }) => "Print".to_string(),
            Node::Statement(Statement::If { .. }) => "If".to_string(),
            Node::Expr(Expr::BinaryOp { op, .. }) => op.symbol().to_string(),
            Node::Expr(Expr::Identifier { name, .. }) => format!("IDENTIFIER({})", name),
            Node::Expr(Expr::Literal { text, .. }) => format!("LITERAL({})", text),
        }
    }

    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Program(program) => program.statements.iter().map(Node::Statement).collect(),
            Node::Statement(Statement::Print { expr, .. }) => vec![Node::Expr(expr)],
            Node::Statement(Statement::If {
                condition,
                then_branch,
                else_branch,
                ..
            }) => vec![
                Node::Expr(condition),
                Node::Statement(then_branch),
                Node::Statement(else_branch),
            ],
            Node::Expr(Expr::BinaryOp { left, right, .. }) => {
                vec![Node::Expr(left), Node::Expr(right)]
            }
            Node::Expr(Expr::Identifier { .. }) | Node::Expr(Expr::Literal { .. }) => Vec::new(),
        }
    }

    /// One line per node, children indented two spaces under their parent
    pub fn render_tree(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.push_tree_lines(0, &mut lines);
        lines
    }

    fn push_tree_lines(&self, depth: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", "  ".repeat(depth), self.label()));
        for child in self.children() {
            child.push_tree_lines(depth + 1, lines);
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ASTNode(value={}, children=[", self.label())?;
        for (i, child) in self.children().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "])")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_node())
    }
}
