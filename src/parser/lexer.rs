//! Lexer (tokenizer) for tinyscript source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Whitespace and `#` comments are consumed while scanning and never appear in
//! the output.
//!
//! Every position is classified by the first matching rule, in this order:
//! separator, identifier/keyword, operator, number, string, whitespace,
//! comment. Anything else is a [`LexError`].
//!
//! Identifiers start with a Unicode letter and continue with Unicode letters
//! or digits (`x²` is one identifier). Number literals start with and contain
//! only ASCII digits, so a lone `²` is an unexpected character.

use super::ast::SourceLocation;
use super::tables::{self, Keyword, Operator, Quote, Separator};
use std::fmt;

/// Token classes emitted by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Separator,
    Operator,
    Literal,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Literal => "LITERAL",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `text` is the exact source substring, quotes included for string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    /// Build a token with no meaningful source position
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            location: SourceLocation::default(),
        }
    }

    pub fn at(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::lookup(&self.text),
            _ => None,
        }
    }

    pub fn separator(&self) -> Option<Separator> {
        match self.kind {
            TokenKind::Separator => {
                let mut chars = self.text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Separator::from_char(ch),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => Operator::lookup(&self.text),
            _ => None,
        }
    }

    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    pub fn is_separator(&self, sep: Separator) -> bool {
        self.separator() == Some(sep)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token(type={}, value={})", self.kind, self.text)
    }
}

/// What went wrong while scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A number containing a second decimal point; carries the text scanned so far
    InvalidLiteral(String),
    UnexpectedCharacter(char),
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub location: SourceLocation,
}

impl LexError {
    pub fn message(&self) -> String {
        match &self.kind {
            LexErrorKind::InvalidLiteral(text) => format!("Invalid literal: {}", text),
            LexErrorKind::UnexpectedCharacter(ch) => {
                format!("Unexpected character: {:?}", ch)
            }
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line,
            self.location.column,
            self.message()
        )
    }
}

impl std::error::Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;

/// Tokenize `source` in one pass
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Lexer for tinyscript source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            let loc = self.current_location();

            if let Some(sep) = Separator::from_char(ch) {
                self.advance();
                tokens.push(Token::at(TokenKind::Separator, sep.as_char(), loc));
            } else if ch.is_alphabetic() {
                tokens.push(self.identifier_or_keyword(loc));
            } else if let Some(op) = self.operator() {
                tokens.push(Token::at(TokenKind::Operator, op.as_str(), loc));
            } else if ch.is_ascii_digit() {
                tokens.push(self.number_literal(loc)?);
            } else if let Some(quote) = Quote::from_char(ch) {
                tokens.push(self.string_literal(quote, loc));
            } else if tables::is_whitespace(ch) {
                self.advance();
            } else if tables::is_comment_start(ch) {
                self.skip_comment();
            } else {
                return Err(LexError {
                    kind: LexErrorKind::UnexpectedCharacter(ch),
                    location: loc,
                });
            }
        }

        Ok(tokens)
    }

    /// Maximal run of letters and Unicode digits, then the keyword check
    fn identifier_or_keyword(&mut self, loc: SourceLocation) -> Token {
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if Keyword::lookup(&ident).is_some() {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::at(kind, ident, loc)
    }

    /// Consume an operator at the cursor, if one starts here.
    ///
    /// `<` looks one character ahead for `<=` and `<>`.
    fn operator(&mut self) -> Option<Operator> {
        let ch = self.peek()?;
        if ch == '<' {
            let two = match self.peek_ahead(1) {
                Some('=') => Some(Operator::Le),
                Some('>') => Some(Operator::NotEq),
                _ => None,
            };
            if let Some(op) = two {
                self.advance();
                self.advance();
                return Some(op);
            }
        }

        let op = Operator::from_char(ch)?;
        self.advance();
        Some(op)
    }

    /// Digits with at most one decimal point
    fn number_literal(&mut self, loc: SourceLocation) -> LexResult<Token> {
        let mut num_str = String::new();
        let mut used_dot = false;

        while let Some(ch) = self.peek() {
            if ch == '.' {
                num_str.push(ch);
                if used_dot {
                    return Err(LexError {
                        kind: LexErrorKind::InvalidLiteral(num_str),
                        location: loc,
                    });
                }
                used_dot = true;
            } else if ch.is_ascii_digit() {
                num_str.push(ch);
            } else {
                break;
            }
            self.advance();
        }

        Ok(Token::at(TokenKind::Literal, num_str, loc))
    }

    /// Quoted string, no escapes. An unterminated string runs to end of input.
    fn string_literal(&mut self, quote: Quote, loc: SourceLocation) -> Token {
        let mut text = String::new();
        if let Some(open) = self.advance() {
            text.push(open);
        }

        while let Some(ch) = self.advance() {
            text.push(ch);
            if ch == quote.as_char() {
                break;
            }
        }

        Token::at(TokenKind::Literal, text, loc)
    }

    /// Skip to end of line; the newline itself is left for the whitespace rule
    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_simple_tokens() {
        let tokens = kinds_and_texts("print x + 1");

        assert_eq!(
            tokens,
            vec![
                (TokenKind::Keyword, "print".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Operator, "+".to_string()),
                (TokenKind::Literal, "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_two_character_operators() {
        let tokens = kinds_and_texts("a<>b c<=d e<f");
        let ops: Vec<&str> = tokens
            .iter()
            .filter(|(kind, _)| *kind == TokenKind::Operator)
            .map(|(_, text)| text.as_str())
            .collect();

        assert_eq!(ops, vec!["<>", "<=", "<"]);
    }

    #[test]
    fn test_comments() {
        let tokens = kinds_and_texts("print a # trailing words\nprint b");

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3], (TokenKind::Identifier, "b".to_string()));
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert!(tokenize("# nothing else").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = kinds_and_texts("print 'abc");

        assert_eq!(tokens[1], (TokenKind::Literal, "'abc".to_string()));
    }

    #[test]
    fn test_mismatched_quote_does_not_close() {
        let tokens = kinds_and_texts(r#""it's" x"#);

        assert_eq!(tokens[0], (TokenKind::Literal, r#""it's""#.to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x".to_string()));
    }

    #[test]
    fn test_locations() {
        let tokens = tokenize("print x\n  if").unwrap();

        assert_eq!(tokens[0].location, SourceLocation::new(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::new(1, 7));
        assert_eq!(tokens[2].location, SourceLocation::new(2, 3));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("print x\nprint @").unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('@'));
        assert_eq!(err.location, SourceLocation::new(2, 7));
    }

    #[test]
    fn test_identifier_continues_with_unicode_digits() {
        let tokens = kinds_and_texts("print x² + y1");

        assert_eq!(tokens[1], (TokenKind::Identifier, "x²".to_string()));
        assert_eq!(tokens[3], (TokenKind::Identifier, "y1".to_string()));
    }

    #[test]
    fn test_unicode_digit_cannot_start_a_number() {
        let err = tokenize("print ²").unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('²'));
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        let err = tokenize("print x\r\n").unwrap_err();

        assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('\r'));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Separator, "(");

        assert_eq!(token.to_string(), "Token(type=SEPARATOR, value=()");
    }
}
