//! Character-class tables
//!
//! The fixed sets the lexer classifies characters against: separators,
//! operators, reserved keywords, quote characters, whitespace and the comment
//! introducer. Lookup maps are built once on first use and never mutated.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Single-character separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Comma,     // ,
    Semicolon, // ;
    Colon,     // :
    Dot,       // .
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    LBracket,  // [
}

impl Separator {
    pub const ALL: [Separator; 9] = [
        Separator::Comma,
        Separator::Semicolon,
        Separator::Colon,
        Separator::Dot,
        Separator::LParen,
        Separator::RParen,
        Separator::LBrace,
        Separator::RBrace,
        Separator::LBracket,
    ];

    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
            Separator::Colon => ':',
            Separator::Dot => '.',
            Separator::LParen => '(',
            Separator::RParen => ')',
            Separator::LBrace => '{',
            Separator::RBrace => '}',
            Separator::LBracket => '[',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<char, Separator>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|sep| (sep.as_char(), *sep)).collect())
            .get(&ch)
            .copied()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Operators
///
/// `<>` and `<=` are the only two-character entries; they share a leading
/// `<` with [`Operator::Lt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,   // +
    Minus,  // -
    Times,  // *
    Divide, // /
    Equals, // =
    NotEq,  // <>
    Lt,     // <
    Le,     // <=
    Gt,     // >
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Times,
        Operator::Divide,
        Operator::Equals,
        Operator::NotEq,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Times => "*",
            Operator::Divide => "/",
            Operator::Equals => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
        }
    }

    pub fn lookup(text: &str) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<&'static str, Operator>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|op| (op.as_str(), *op)).collect())
            .get(text)
            .copied()
    }

    /// Single-character operator for `ch`, if any
    pub fn from_char(ch: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        Self::lookup(ch.encode_utf8(&mut buf))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved keywords (case-sensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Then,
    Else,
    End,
    While,
    Do,
    For,
    To,
    Step,
    Print,
    Return,
}

impl Keyword {
    pub const ALL: [Keyword; 11] = [
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::End,
        Keyword::While,
        Keyword::Do,
        Keyword::For,
        Keyword::To,
        Keyword::Step,
        Keyword::Print,
        Keyword::Return,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::End => "end",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::For => "for",
            Keyword::To => "to",
            Keyword::Step => "step",
            Keyword::Print => "print",
            Keyword::Return => "return",
        }
    }

    pub fn lookup(word: &str) -> Option<Self> {
        static TABLE: OnceLock<FxHashMap<&'static str, Keyword>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::ALL.iter().map(|kw| (kw.as_str(), *kw)).collect())
            .get(word)
            .copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String literal delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single, // '
    Double, // "
}

impl Quote {
    pub fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

/// Introduces a comment running to end of line
pub const COMMENT_START: char = '#';

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

pub fn is_comment_start(ch: char) -> bool {
    ch == COMMENT_START
}
