//! Recursive-descent JSON parser.
//!
//! Overview
//! - [`parse`] and [`parse_with_options`] build a fresh [`Parser`] for every
//!   call. The parser owns the input cursor, the nesting depth counter and the
//!   [`Scratch`] workspace; nothing outlives the call and nothing is shared
//!   between calls.
//! - `parse_value` dispatches on one byte of lookahead. Strings, numbers and
//!   literals are lexed straight from the input slice with no separate token
//!   stream.
//! - Arrays and objects push each finished child onto the scratch stacks and
//!   materialize an exactly sized container when the closing bracket arrives.
//!
//! Failure recovery
//! - Internal functions return `Result<_, ErrorKind>`; the byte offset is
//!   attached once, at the top.
//! - Every container that fails unwinds its own scratch region before
//!   returning, which drops (and so recursively releases) the children it had
//!   accumulated. The scratch is therefore empty after every call, which
//!   `parse_document` asserts in debug builds.

mod number;
mod string;

use alloc::boxed::Box;

use crate::{
    ErrorKind, ParseError, ParserOptions,
    scratch::{Mark, Scratch},
    value::{Member, Value},
};

/// Parses a complete JSON document with default [`ParserOptions`].
///
/// The whole input must be exactly one value, optionally surrounded by JSON
/// whitespace (space, tab, carriage return, line feed).
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a single well-formed JSON
/// value.
///
/// # Examples
///
/// ```
/// use jsontree::{ErrorKind, parse};
///
/// let doc = parse(r#" {"a":1,"b":[2,3]} "#).unwrap();
/// assert_eq!(doc.object_size(), 2);
/// assert_eq!(doc.object_value(1).array_element(0).number(), 2.0);
///
/// assert_eq!(parse("0123").unwrap_err().kind(), ErrorKind::InvalidValue);
/// assert_eq!(parse("1e400").unwrap_err().kind(), ErrorKind::NumberTooBig);
/// ```
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParseError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON document with the given options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not a single well-formed JSON
/// value or nests deeper than [`ParserOptions::max_depth`].
pub fn parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParseError> {
    let input = input.as_ref();
    tracing::trace!(len = input.len(), "parsing JSON document");
    let result = Parser::new(input, options).parse_document();
    if let Err(err) = &result {
        tracing::debug!(
            kind = ?err.kind(),
            line = err.line(),
            column = err.column(),
            "rejected JSON document"
        );
    }
    result
}

/// State for one top-level parse.
#[derive(Debug)]
pub(crate) struct Parser<'src> {
    input: &'src [u8],
    pos: usize,
    depth: usize,
    options: ParserOptions,
    scratch: Scratch,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            options,
            scratch: Scratch::new(),
        }
    }

    /// Parses the whole input as exactly one value.
    pub(crate) fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let result = self.parse_value().and_then(|value| {
            self.skip_whitespace();
            if self.pos < self.input.len() {
                // `value` is dropped here; the caller never sees it.
                Err(ErrorKind::RootNotSingular)
            } else {
                Ok(value)
            }
        });
        debug_assert!(self.scratch.is_empty(), "scratch not drained");
        debug_assert_eq!(self.depth, 0);
        result.map_err(|kind| ParseError::at(kind, self.input, self.pos))
    }

    #[cfg(test)]
    pub(crate) fn scratch_usage(&self) -> usize {
        self.scratch.usage()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes `byte` if it is next.
    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self) -> Result<Value, ErrorKind> {
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::True),
            Some(b'f') => self.parse_literal(b"false", Value::False),
            Some(b'"') => {
                self.pos += 1;
                Ok(Value::String(self.parse_string_raw()?))
            }
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            None => Err(ErrorKind::ExpectValue),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, ErrorKind> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ErrorKind::InvalidValue)
        }
    }

    /// Counts one more open container against the depth limit.
    fn enter(&mut self) -> Result<(), ErrorKind> {
        if self.depth >= self.options.max_depth {
            tracing::warn!(
                max_depth = self.options.max_depth,
                offset = self.pos,
                "JSON nesting depth limit exceeded"
            );
            return Err(ErrorKind::DepthLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value, ErrorKind> {
        self.enter()?;
        self.pos += 1; // '['
        let mark = self.scratch.values.mark();
        let result = self.parse_elements(mark);
        if result.is_err() {
            self.scratch.values.unwind(mark);
        }
        self.depth -= 1;
        result
    }

    fn parse_elements(&mut self, mark: Mark) -> Result<Value, ErrorKind> {
        self.skip_whitespace();
        if self.eat(b']') {
            return Ok(Value::Array(Box::default()));
        }
        loop {
            self.skip_whitespace();
            if self.peek() == Some(b']') {
                // Only reachable directly after a comma.
                return Err(ErrorKind::ExpectValue);
            }
            let element = self.parse_value()?;
            self.scratch.values.push(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(self.scratch.take_values(mark)));
                }
                _ => return Err(ErrorKind::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ErrorKind> {
        self.enter()?;
        self.pos += 1; // '{'
        let mark = self.scratch.members.mark();
        let result = self.parse_members(mark);
        if result.is_err() {
            self.scratch.members.unwind(mark);
        }
        self.depth -= 1;
        result
    }

    fn parse_members(&mut self, mark: Mark) -> Result<Value, ErrorKind> {
        self.skip_whitespace();
        if self.eat(b'}') {
            return Ok(Value::Object(Box::default()));
        }
        loop {
            self.skip_whitespace();
            if !self.eat(b'"') {
                return Err(ErrorKind::MissKey);
            }
            let key = self.parse_string_raw().map_err(|kind| match kind {
                ErrorKind::MissQuotationMark => ErrorKind::MissKey,
                other => other,
            })?;
            self.skip_whitespace();
            if !self.eat(b':') {
                return Err(ErrorKind::MissColon);
            }
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.scratch.members.push(Member::new(key, value));
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(self.scratch.take_members(mark)));
                }
                _ => return Err(ErrorKind::MissCommaOrCurlyBracket),
            }
        }
    }
}
