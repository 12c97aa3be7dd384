//! The byte-based tokenizer (lexer).
//!
//! It consumes the raw input `&str` (as `&[u8]`) and produces a stream of
//! `Token`s borrowing their literals from the input. It never fails: anything
//! it cannot classify becomes a `TokenKind::Illegal` token, and rejecting it
//! is left to the parser.

use crate::token::{Position, Token, TokenKind};
use memchr::memchr;
use std::borrow::Cow;

// --- The Lookup Table (LUT) ---
// One entry per byte value, so each byte is classified with a single lookup.
const W: u8 = 1; // Whitespace
const S: u8 = 2; // Structural
const A: u8 = 3; // Start of a bare word (keywords)
const D: u8 = 4; // Digit
const Q: u8 = 5; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;

    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    let mut b = b'a';
    while b <= b'z' {
        table[b as usize] = A;
        table[(b - b'a' + b'A') as usize] = A;
        b += 1;
    }
    table[b'_' as usize] = A;

    table[b'"' as usize] = Q;

    table[b'-' as usize] = D;
    let mut d = b'0';
    while d <= b'9' {
        table[d as usize] = D;
        d += 1;
    }

    // 0: everything else is illegal at the start of a token
    table
};

/// The tokenizer.
///
/// Yields one `Token` per call to `next`, then a single positioned `Eof`
/// token, then `None`.
pub struct Tokenizer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    cursor: usize,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new `Tokenizer` from an input string.
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input,
            bytes: input.as_bytes(),
            cursor: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }
            self.advance_byte();
        }
    }

    /// Advances the cursor by one byte, updating line/column.
    /// UTF-8 continuation bytes do not move the column.
    #[inline]
    fn advance_byte(&mut self) {
        let byte = self.bytes[self.cursor];
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            self.column += 1;
        }
        self.cursor += 1;
    }

    #[inline]
    fn advance_to(&mut self, end: usize) {
        while self.cursor < end {
            self.advance_byte();
        }
    }

    fn literal(&self, start: usize) -> Cow<'a, str> {
        Cow::Borrowed(&self.input[start..self.cursor])
    }

    /// Reads a bare word; exact keywords get their own kind.
    fn lex_word(&mut self) -> (TokenKind, Cow<'a, str>) {
        let start = self.cursor;
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if !(byte.is_ascii_alphanumeric() || byte == b'_') {
                break;
            }
            self.advance_byte();
        }

        let kind = match &self.input[start..self.cursor] {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            _ => TokenKind::Illegal,
        };
        (kind, self.literal(start))
    }

    /// Reads a string. The literal is the raw content between the quotes;
    /// escapes are only recognised so an escaped quote does not end the string.
    fn lex_string(&mut self) -> (TokenKind, Cow<'a, str>) {
        let open = self.cursor;
        self.advance_byte(); // opening '"'
        let content_start = self.cursor;

        let mut current_slice = &self.bytes[content_start..];
        let mut total_offset = 0;

        let quote_index = loop {
            match memchr(b'"', current_slice) {
                Some(i) => {
                    // Count the backslashes right before the quote.
                    let backslashes = current_slice[..i]
                        .iter()
                        .rev()
                        .take_while(|&&b| b == b'\\')
                        .count();

                    if backslashes % 2 == 0 {
                        break Some(total_offset + i);
                    }
                    total_offset += i + 1;
                    current_slice = &current_slice[i + 1..];
                }
                None => break None,
            }
        };

        match quote_index {
            Some(len) => {
                self.advance_to(content_start + len);
                let content = self.literal(content_start);
                self.advance_byte(); // closing '"'
                (TokenKind::String, content)
            }
            None => {
                // Unterminated: the rest of the input, opening quote included.
                self.advance_to(self.bytes.len());
                (TokenKind::Illegal, self.literal(open))
            }
        }
    }

    /// Reads the greedy run of number characters. The text is not validated;
    /// numbers are rejected by the parser anyway.
    fn lex_number(&mut self) -> (TokenKind, Cow<'a, str>) {
        let start = self.cursor;
        while let Some(&byte) = self.bytes.get(self.cursor) {
            match byte {
                b if BYTE_PROPERTIES[b as usize] == D => self.advance_byte(),
                b'.' | b'e' | b'E' | b'+' => self.advance_byte(),
                _ => break,
            }
        }
        (TokenKind::Number, self.literal(start))
    }

    /// A single unrecognised character.
    fn lex_illegal(&mut self) -> (TokenKind, Cow<'a, str>) {
        let start = self.cursor;
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.advance_to(start + width);
        (TokenKind::Illegal, self.literal(start))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.skip_whitespace();
        let (line, column) = (self.line, self.column);

        let byte = match self.bytes.get(self.cursor) {
            Some(&b) => b,
            None => {
                self.finished = true;
                return Some(Token::eof().at(line, column));
            }
        };

        let (kind, literal) = match BYTE_PROPERTIES[byte as usize] {
            S => {
                let start = self.cursor;
                self.advance_byte();
                let kind = match byte {
                    b'{' => TokenKind::LeftBrace,
                    b'}' => TokenKind::RightBrace,
                    b'[' => TokenKind::LeftBracket,
                    b']' => TokenKind::RightBracket,
                    b':' => TokenKind::Colon,
                    _ => TokenKind::Comma,
                };
                (kind, self.literal(start))
            }
            A => self.lex_word(),
            D => self.lex_number(),
            Q => self.lex_string(),
            _ => self.lex_illegal(),
        };

        Some(Token {
            kind,
            literal,
            position: Position::new(line, column),
        })
    }
}

// --- Unit Tests for Tokenizer ---
#[cfg(test)]
mod tests {
    use super::*;

    fn collect_kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input).map(|token| token.kind).collect()
    }

    fn collect_literals(input: &str) -> Vec<String> {
        Tokenizer::new(input)
            .map(|token| token.literal.into_owned())
            .collect()
    }

    #[test]
    fn test_tokenizer_structurals() {
        assert_eq!(
            collect_kinds("{}[]:,"),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenizer_keywords_and_words() {
        assert_eq!(
            collect_kinds("true false null nil True"),
            vec![
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Illegal,
                TokenKind::Illegal,
                TokenKind::Eof,
            ]
        );
        assert_eq!(collect_literals("truex")[0], "truex");
    }

    #[test]
    fn test_tokenizer_strings_keep_raw_text() {
        let input = r#" "hello" "a\nb" "\"" "" "#;
        assert_eq!(
            collect_literals(input),
            vec!["hello", r"a\nb", r#"\""#, "", ""]
        );
        assert_eq!(
            collect_kinds(input),
            vec![
                TokenKind::String,
                TokenKind::String,
                TokenKind::String,
                TokenKind::String,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenizer_escaped_backslash_before_quote() {
        let input = r#""a\\" :"#;
        assert_eq!(collect_literals(input), vec![r"a\\", ":", ""]);
    }

    #[test]
    fn test_tokenizer_unterminated_string() {
        let tokens: Vec<_> = Tokenizer::new(r#"{"abc"#).collect();
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, r#""abc"#);
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenizer_numbers() {
        assert_eq!(collect_literals("123 -0.5 1e10"), vec!["123", "-0.5", "1e10", ""]);
        assert_eq!(
            collect_kinds("-1"),
            vec![TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_tokenizer_illegal_characters() {
        let tokens: Vec<_> = Tokenizer::new("?é").collect();
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].literal, "?");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].literal, "é");
    }

    #[test]
    fn test_tokenizer_positions() {
        let input = "{\n  \"key\" :\n\ttrue }";
        let positions: Vec<Position> = Tokenizer::new(input).map(|t| t.position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(1, 1),
                Position::new(2, 3),
                Position::new(2, 9),
                Position::new(3, 2),
                Position::new(3, 7),
                Position::new(3, 8),
            ]
        );
    }

    #[test]
    fn test_tokenizer_ends_after_single_eof() {
        let mut tokenizer = Tokenizer::new("  ");
        assert_eq!(tokenizer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert!(tokenizer.next().is_none());
    }
}
