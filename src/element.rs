//! Contains the `Element` tree built by the parser.
//!
//! This module also includes the rendering logic for writing an `Element`
//! back out as JSON text, compact (`Display`) or indented (`Element::pretty`).
use crate::token::Token;
use std::fmt;

/// One parsed syntactic unit and everything nested beneath it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Element<'a> {
    /// A `{ ... }` object.
    Object(Object<'a>),
    /// A string value; wraps the originating string token.
    String(Token<'a>),
    /// `true`, `false` or `null`; wraps the originating token.
    Keyword(Token<'a>),
}

/// A JSON object: pairs in source order.
///
/// Keys are not deduplicated. `{"a":1,"a":2}` keeps both pairs.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Object<'a> {
    pub pairs: Vec<ObjectPair<'a>>,
}

/// A single `key: value` member of an object.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ObjectPair<'a> {
    /// The string token used as the key.
    pub key: Token<'a>,
    pub value: Element<'a>,
}

impl<'a> Object<'a> {
    pub fn new() -> Self {
        Object { pairs: Vec::new() }
    }

    pub fn push(&mut self, key: Token<'a>, value: Element<'a>) {
        self.pairs.push(ObjectPair { key, value });
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectPair<'a>> {
        self.pairs.iter()
    }

    /// The key tokens in source order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &Token<'a>> {
        self.pairs.iter().map(|pair| &pair.key)
    }

    /// The value of the first pair whose raw key text equals `key`.
    pub fn get(&self, key: &str) -> Option<&Element<'a>> {
        self.pairs
            .iter()
            .find(|pair| pair.key.literal == key)
            .map(|pair| &pair.value)
    }

    /// Every value stored under `key`, in source order.
    pub fn get_all<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s Element<'a>> + 's {
        self.pairs
            .iter()
            .filter(move |pair| pair.key.literal == key)
            .map(|pair| &pair.value)
    }
}

impl<'o, 'a> IntoIterator for &'o Object<'a> {
    type Item = &'o ObjectPair<'a>;
    type IntoIter = std::slice::Iter<'o, ObjectPair<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl<'a> Element<'a> {
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Element::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The raw text of a string element.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(token) => Some(token.literal.as_ref()),
            _ => None,
        }
    }

    /// The literal of a keyword element (`"true"`, `"false"` or `"null"`).
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Element::Keyword(token) => Some(token.literal.as_ref()),
            _ => None,
        }
    }

    /// Detaches the tree from the source text it borrows.
    pub fn into_owned(self) -> Element<'static> {
        match self {
            Element::Object(object) => Element::Object(Object {
                pairs: object
                    .pairs
                    .into_iter()
                    .map(|pair| ObjectPair {
                        key: pair.key.into_owned(),
                        value: pair.value.into_owned(),
                    })
                    .collect(),
            }),
            Element::String(token) => Element::String(token.into_owned()),
            Element::Keyword(token) => Element::Keyword(token.into_owned()),
        }
    }

    /// Renders the element as compact JSON.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Renders the element as indented JSON.
    pub fn stringify_pretty(&self) -> String {
        self.pretty().to_string()
    }

    /// A `Display` adapter that writes the element with two-space indentation.
    pub fn pretty(&self) -> Pretty<'_, 'a> {
        Pretty { element: self }
    }

    fn write_compact<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Element::String(token) => write_string(&token.literal, w),
            Element::Keyword(token) => w.write_str(&token.literal),
            Element::Object(object) => {
                w.write_char('{')?;
                for (i, pair) in object.iter().enumerate() {
                    if i > 0 {
                        w.write_char(',')?;
                    }
                    write_string(&pair.key.literal, w)?;
                    w.write_char(':')?;
                    pair.value.write_compact(w)?;
                }
                w.write_char('}')
            }
        }
    }

    fn write_pretty<W: fmt::Write>(&self, w: &mut W, indent: usize) -> fmt::Result {
        let object = match self {
            Element::Object(object) if !object.is_empty() => object,
            // Leaves and `{}` look the same either way.
            _ => return self.write_compact(w),
        };

        w.write_str("{\n")?;
        for (i, pair) in object.iter().enumerate() {
            if i > 0 {
                w.write_str(",\n")?;
            }
            write_indent(w, indent + 1)?;
            write_string(&pair.key.literal, w)?;
            w.write_str(": ")?;
            pair.value.write_pretty(w, indent + 1)?;
        }
        w.write_char('\n')?;
        write_indent(w, indent)?;
        w.write_char('}')
    }
}

/// String literals are raw source text, so they are written back verbatim.
fn write_string<W: fmt::Write>(raw: &str, w: &mut W) -> fmt::Result {
    w.write_char('"')?;
    w.write_str(raw)?;
    w.write_char('"')
}

fn write_indent<W: fmt::Write>(w: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        w.write_str("  ")?;
    }
    Ok(())
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_compact(f)
    }
}

/// Pretty-printing view of an `Element`, see [`Element::pretty`].
pub struct Pretty<'e, 'a> {
    element: &'e Element<'a>,
}

impl fmt::Display for Pretty<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.element.write_pretty(f, 0)
    }
}
