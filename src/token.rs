//! Defines the `Token` and `TokenKind` types and the `TokenStream` capability.
//!
//! These are the contract between a token source (the bundled `Tokenizer`,
//! or any hand-built sequence) and the `Parser`.

use std::borrow::Cow;
use std::fmt;

/// The kind of a `Token`.
///
/// The parser only implements objects, strings and keywords. `LeftBracket`,
/// `RightBracket` and `Number` are produced so they can be rejected at
/// dispatch with a precise message.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A string, e.g., `"hello"`
    String,
    /// A number, e.g., `123.4`
    Number,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// Any character or word the tokenizer does not recognise.
    Illegal,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// The source form of the kind, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 1-indexed line/column location in the source text.
///
/// `Position::default()` (0:0) marks a token that did not come from text,
/// such as one built by hand in a test.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Position {
    /// The 1-indexed line number.
    pub line: usize,
    /// The 1-indexed column number, counted in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position from a 1-indexed line and column.
    ///
    /// ```
    /// use rill_check::Position;
    ///
    /// let position = Position::new(2, 5);
    /// assert!(position.is_known());
    /// assert_eq!(position.to_string(), "line 2, column 5");
    /// ```
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    /// Whether this position points into real source text.
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A single lexical token: its kind plus the literal text it was read from.
///
/// For strings the literal is the raw text between the quotes, escapes
/// left as written.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'a> {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The source text the token was read from.
    pub literal: Cow<'a, str>,
    /// Where the token starts in the source text.
    pub position: Position,
}

impl<'a> Token<'a> {
    /// Builds a token with no source position.
    pub fn new(kind: TokenKind, literal: impl Into<Cow<'a, str>>) -> Self {
        Token {
            kind,
            literal: literal.into(),
            position: Position::default(),
        }
    }

    /// Sets the source position of the token.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.position = Position::new(line, column);
        self
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }

    /// Detaches the token from the source text it borrows.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            literal: Cow::Owned(self.literal.into_owned()),
            position: self.position,
        }
    }
}

/// A source of tokens, pulled one at a time.
///
/// There is no end-of-stream signal other than a `TokenKind::Eof` token;
/// implementations keep returning `Eof` once they are exhausted.
pub trait TokenStream<'a> {
    /// Pulls the next token; returns `Eof` once the source is exhausted.
    fn next_token(&mut self) -> Token<'a>;
}

/// Any iterator of tokens is a stream; running out yields `Eof`.
impl<'a, I> TokenStream<'a> for I
where
    I: Iterator<Item = Token<'a>>,
{
    fn next_token(&mut self) -> Token<'a> {
        self.next().unwrap_or_else(Token::eof)
    }
}
