//! Contains the recursive-descent `Parser`.
//!
//! The parser holds exactly one lookahead token and pulls the next one from
//! its `TokenStream` only through [`Parser::advance`]. Every parsing procedure
//! returns with the lookahead still on the last token it consumed; the caller
//! advances past it before looking at what follows.
//!
//! Grammar:
//!
//! ```text
//! element := object | string | true | false | null
//! object  := '{' (member (',' member)*)? '}'
//! member  := string ':' element
//! ```
//!
//! The object loop is slightly more permissive than the grammar above: a
//! comma directly before `}` is accepted, and so are two members with no
//! comma between them.

use crate::element::{Element, Object};
use crate::error::{Result, SyntaxError};
use crate::token::{Token, TokenKind, TokenStream};
use crate::DEFAULT_MAX_DEPTH;
use std::mem;

/// The recursive-descent parser.
///
/// Built once per input around a token stream it owns exclusively, then
/// used for a single [`validate`](Parser::validate) or
/// [`parse`](Parser::parse) call.
pub struct Parser<'a, S> {
    /// The token source.
    stream: S,
    /// The single buffered lookahead token.
    current: Token<'a>,
    /// The maximum object nesting depth.
    max_depth: usize,
    /// The *current* object nesting depth.
    depth: usize,
}

impl<'a, S> Parser<'a, S>
where
    S: TokenStream<'a>,
{
    /// Creates a parser and primes the lookahead with the first token.
    pub fn new(stream: S) -> Self {
        Self::with_max_depth(stream, DEFAULT_MAX_DEPTH)
    }

    /// Like [`Parser::new`], with a custom limit on object nesting.
    pub fn with_max_depth(mut stream: S, max_depth: usize) -> Self {
        let current = stream.next_token();
        Parser {
            stream,
            current,
            max_depth,
            depth: 0,
        }
    }

    /// Checks that the input starts with a well-formed element.
    ///
    /// Tokens after the first complete element are not inspected.
    pub fn validate(&mut self) -> Result<()> {
        self.parse().map(|_| ())
    }

    /// Parses the first element of the input and returns it.
    ///
    /// Same walk as [`Parser::validate`]; tokens after the element are not
    /// inspected.
    pub fn parse(&mut self) -> Result<Element<'a>> {
        self.parse_element().map_err(|e| {
            tracing::debug!(error = %e, position = ?e.position(), "parse failed");
            e
        })
    }

    /// Replaces the lookahead with the next token and returns the old one.
    fn advance(&mut self) -> Token<'a> {
        let next = self.stream.next_token();
        tracing::trace!(kind = ?next.kind, literal = %next.literal, "advance");
        mem::replace(&mut self.current, next)
    }

    /// Fails unless the lookahead is of the given kind. Does not advance.
    fn expect(&self, kind: TokenKind) -> Result<()> {
        if self.current.kind == kind {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected: kind,
                found: self.current.literal.to_string(),
                position: self.current.position,
            })
        }
    }

    /// Chooses a procedure from the kind of the lookahead alone.
    fn parse_element(&mut self) -> Result<Element<'a>> {
        match self.current.kind {
            TokenKind::LeftBrace => self.parse_object().map(Element::Object),
            TokenKind::String => Ok(self.parse_string()),
            TokenKind::True | TokenKind::False | TokenKind::Null => Ok(self.parse_keyword()),
            TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Number
            | TokenKind::Illegal
            | TokenKind::Eof => Err(SyntaxError::UnsupportedToken {
                literal: self.current.literal.to_string(),
                position: self.current.position,
            }),
        }
    }

    fn parse_object(&mut self) -> Result<Object<'a>> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                position: self.current.position,
            });
        }

        self.depth += 1;
        let object = self.parse_members();
        self.depth -= 1;
        object
    }

    /// The body of an object, from `{` up to and including the check for `}`.
    fn parse_members(&mut self) -> Result<Object<'a>> {
        let mut object = Object::new();

        self.advance(); // '{'
        while self.current.kind == TokenKind::String {
            let key = self.advance();

            self.expect(TokenKind::Colon)?;
            self.advance();

            let value = self.parse_element()?;
            object.push(key, value);

            // Step past the value's last token.
            self.advance();
            if self.current.kind == TokenKind::Comma {
                self.advance();
            }
        }

        self.expect(TokenKind::RightBrace)?;
        tracing::debug!(pairs = object.len(), depth = self.depth, "object complete");
        Ok(object)
    }

    fn parse_string(&self) -> Element<'a> {
        Element::String(self.current.clone())
    }

    fn parse_keyword(&self) -> Element<'a> {
        Element::Keyword(self.current.clone())
    }
}
