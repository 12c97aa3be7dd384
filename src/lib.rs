//! # rill-check
//!
//! `rill-check` validates JSON text with a small recursive-descent parser and,
//! on the way, builds an order-preserving tree of the elements it read.
//!
//! ## Supported grammar
//!
//! Objects, strings and the keywords `true`, `false` and `null`. Arrays and
//! numbers are recognised by the tokenizer but rejected by the parser with an
//! "unsupported token" error. String contents are kept exactly as written;
//! escape sequences are not decoded or checked.
//!
//! Three deliberate leniencies of the object rule:
//! * a trailing comma before `}` is accepted (`{"a":"b",}`);
//! * two members with no comma between them are accepted (`{"a":"b" "c":"d"}`);
//! * anything after the first complete element is ignored.
//!
//! ```
//! use rill_check::validate;
//!
//! assert!(validate(r#"{"a":"b",}"#).is_ok());
//! assert!(validate(r#"{"a":"b" "c":"d"}"#).is_ok());
//! assert!(validate(r#"{"a":"b"} trailing"#).is_ok());
//! ```
//!
//! Objects keep every pair in source order, including duplicate keys.
//!
//! ## Quick Start
//!
//! ```
//! use rill_check::{parse, validate};
//!
//! assert!(validate(r#"{"name": "Babbage", "admin": true}"#).is_ok());
//!
//! let err = validate(r#"{"name" "Babbage"}"#).unwrap_err();
//! assert_eq!(err.to_string(), r#"expected ':', found "Babbage""#);
//!
//! let root = parse(r#"{"a": null, "a": false}"#).unwrap();
//! assert_eq!(root.as_object().unwrap().len(), 2);
//! ```
//!
//! ## Driving the parser directly
//!
//! Any `Iterator<Item = Token>` is a token stream, so the parser can run over
//! tokens from somewhere other than the bundled tokenizer.
//!
//! ```
//! use rill_check::{Parser, Token, TokenKind};
//!
//! let tokens = vec![
//!     Token::new(TokenKind::LeftBrace, "{"),
//!     Token::new(TokenKind::RightBrace, "}"),
//! ];
//! assert!(Parser::new(tokens.into_iter()).validate().is_ok());
//! ```

/// Contains the `SyntaxError` type.
pub mod error;
/// Contains the `Element` tree and its JSON rendering.
pub mod element;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains `Token`, `TokenKind` and the `TokenStream` trait.
pub mod token;
/// Contains the `Tokenizer` that turns text into tokens.
pub mod tokenizer;

pub use element::{Element, Object, ObjectPair};
pub use error::{Result, SyntaxError};
pub use parser::Parser;
pub use token::{Position, Token, TokenKind, TokenStream};
pub use tokenizer::Tokenizer;

// --- Constants ---
/// The default maximum object nesting depth, to keep recursion bounded.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The maximum accepted input size (10MB) for the string helpers.
pub const MAX_JSON_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Checks that `input` starts with a well-formed element.
///
/// # Errors
/// Returns a `SyntaxError` for the first grammar violation found, or if the
/// input exceeds `MAX_JSON_SIZE_BYTES`.
///
/// # Examples
/// ```
/// assert!(rill_check::validate("{}").is_ok());
/// assert!(rill_check::validate("[]").is_err());
/// ```
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|_| ())
}

/// Parses the first element of `input` into an `Element` tree.
///
/// The tree borrows its literals from `input`; call
/// [`Element::into_owned`] to detach it.
///
/// # Errors
/// Same as [`validate`].
pub fn parse(input: &str) -> Result<Element<'_>> {
    parse_with_max_depth(input, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], with a custom limit on object nesting.
pub fn parse_with_max_depth(input: &str, max_depth: usize) -> Result<Element<'_>> {
    check_size(input)?;
    tracing::debug!(bytes = input.len(), max_depth, "parsing input");
    Parser::with_max_depth(Tokenizer::new(input), max_depth).parse()
}

fn check_size(input: &str) -> Result<()> {
    if input.len() > MAX_JSON_SIZE_BYTES {
        return Err(SyntaxError::InputTooLarge {
            size: input.len(),
            limit: MAX_JSON_SIZE_BYTES,
        });
    }
    Ok(())
}
