//! The recursive-descent JSON parser.
//!
//! [`Parser::parse`] walks an input byte slice once, left to right, building
//! an owned [`Value`] tree. There is no intermediate token stream: each
//! grammar production (`parse_value`, `parse_number`, `parse_string`,
//! `parse_array`, `parse_object`) reads directly from the input slice and
//! returns either a value or an [`Error`] carrying the byte offset at which
//! the grammar was violated.
//!
//! String decoding borrows a [`ScratchBuffer`] to accumulate unescaped bytes;
//! the buffer is reused across every string literal in the document (object
//! keys and string values alike) because each string's run is drained out to
//! an owned [`BString`] before the next one starts — there is never more than
//! one in-progress string at a time, even though strings nest underneath
//! arrays and objects.

use bstr::BString;

use crate::config::ParserConfig;
use crate::error::{Error, ErrorKind};
use crate::scratch::{Mark, ScratchBuffer};
use crate::value::{JsonArray, JsonObject, Member, Value};

/// Parses a JSON document into a [`Value`] tree.
///
/// A `Parser` holds nothing but its configuration; each call to
/// [`parse`](Self::parse) allocates its own scratch buffer, so a single
/// `Parser` can be reused across unrelated calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with an explicit configuration.
    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses `input` as a single JSON document.
    ///
    /// Leading and trailing whitespace is permitted; anything else left over
    /// after the root value fails with [`ErrorKind::RootNotSingular`].
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on any grammar violation; see [`ErrorKind`] for the
    /// closed set of reasons.
    pub fn parse(&self, input: &[u8]) -> Result<Value, Error> {
        let span = tracing::debug_span!("parse", input_len = input.len());
        let _enter = span.enter();
        let mut cursor = Cursor {
            input,
            pos: 0,
            scratch: ScratchBuffer::with_capacity(self.config.initial_scratch_capacity),
        };
        let value = cursor.parse_value()?;
        cursor.skip_whitespace();
        if cursor.pos != input.len() {
            return Err(cursor.error(ErrorKind::RootNotSingular));
        }
        tracing::debug!(bytes_consumed = cursor.pos, "parse complete");
        debug_assert_eq!(
            cursor.scratch.since(0).len(),
            0,
            "scratch buffer must be empty on successful parse"
        );
        Ok(value)
    }
}

struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    scratch: ScratchBuffer,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.pos)
    }

    /// Discards whatever was pushed onto the scratch buffer since `mark`
    /// before building an error, so a failed string never leaves a stale
    /// partial decode behind for the next string to build on top of.
    fn fail(&mut self, mark: Mark, kind: ErrorKind) -> Error {
        self.scratch.truncate_to(mark);
        self.error(kind)
    }

    fn parse_value(&mut self) -> Result<Value, Error> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(ErrorKind::ExpectValue)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.error(ErrorKind::InvalidValue)),
        }
    }

    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, Error> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(self.error(ErrorKind::InvalidValue))
        }
    }

    /// Consumes a number token per the grammar (`-? (0 | [1-9][0-9]*) (.
    /// [0-9]+)? ([eE] [+-]? [0-9]+)?`) and converts it with `f64::from_str`.
    ///
    /// A syntactically valid number whose magnitude overflows `f64` (e.g.
    /// `1e999`) parses to infinity under `from_str`; that case is rejected
    /// here as [`ErrorKind::NumberTooBig`] rather than silently producing a
    /// non-finite [`Value::Number`].
    fn parse_number(&mut self) -> Result<Value, Error> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                self.pos += 1;
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
            _ => return Err(self.error(ErrorKind::InvalidValue)),
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            match self.peek() {
                Some(b'0'..=b'9') => {
                    while matches!(self.peek(), Some(b'0'..=b'9')) {
                        self.pos += 1;
                    }
                }
                _ => return Err(self.error(ErrorKind::InvalidValue)),
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            match self.peek() {
                Some(b'0'..=b'9') => {
                    while matches!(self.peek(), Some(b'0'..=b'9')) {
                        self.pos += 1;
                    }
                }
                _ => return Err(self.error(ErrorKind::InvalidValue)),
            }
        }
        let text = core::str::from_utf8(&self.input[start..self.pos])
            .expect("number grammar only consumes ASCII bytes");
        let n: f64 = text
            .parse()
            .map_err(|_| Error::new(ErrorKind::InvalidValue, start))?;
        if n.is_infinite() {
            return Err(Error::new(ErrorKind::NumberTooBig, start));
        }
        Ok(Value::Number(n))
    }

    /// Consumes a string token, including its surrounding quotes, decoding
    /// escapes into the scratch buffer as it goes.
    fn parse_string(&mut self) -> Result<BString, Error> {
        self.pos += 1; // opening quote, guaranteed present by the caller
        let mark = self.scratch.mark();
        loop {
            match self.peek() {
                None => return Err(self.fail(mark, ErrorKind::MissQuotationMark)),
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(BString::from(self.scratch.drain_from(mark)));
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.fail(mark, ErrorKind::InvalidStringChar));
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.parse_escape(mark)?;
                }
                Some(byte) => {
                    self.scratch.push_byte(byte);
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_escape(&mut self, mark: Mark) -> Result<(), Error> {
        match self.peek() {
            Some(b'"') => self.push_literal_escape(b'"'),
            Some(b'\\') => self.push_literal_escape(b'\\'),
            Some(b'/') => self.push_literal_escape(b'/'),
            Some(b'b') => self.push_literal_escape(0x08),
            Some(b'f') => self.push_literal_escape(0x0C),
            Some(b'n') => self.push_literal_escape(b'\n'),
            Some(b'r') => self.push_literal_escape(b'\r'),
            Some(b't') => self.push_literal_escape(b'\t'),
            Some(b'u') => {
                self.pos += 1;
                self.parse_unicode_escape(mark)
            }
            _ => Err(self.fail(mark, ErrorKind::InvalidStringEscape)),
        }
    }

    fn push_literal_escape(&mut self, byte: u8) -> Result<(), Error> {
        self.scratch.push_byte(byte);
        self.pos += 1;
        Ok(())
    }

    /// Decodes a `u`-escape, pairing a high surrogate with an immediately
    /// following `u`-escape low surrogate and combining them into a single
    /// codepoint above the BMP, per the encoding RFC 8259 prescribes for
    /// representing supplementary-plane characters in JSON text.
    fn parse_unicode_escape(&mut self, mark: Mark) -> Result<(), Error> {
        let high = self.parse_hex4(mark)?;
        if (0xD800..=0xDBFF).contains(&high) {
            if self.peek() != Some(b'\\') || self.input.get(self.pos + 1).copied() != Some(b'u') {
                return Err(self.fail(mark, ErrorKind::InvalidUnicodeSurrogate));
            }
            self.pos += 2;
            let low = self.parse_hex4(mark)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.fail(mark, ErrorKind::InvalidUnicodeSurrogate));
            }
            let high = u32::from(high) - 0xD800;
            let low = u32::from(low) - 0xDC00;
            self.push_codepoint(mark, 0x10000 + (high << 10) + low)
        } else if (0xDC00..=0xDFFF).contains(&high) {
            Err(self.fail(mark, ErrorKind::InvalidUnicodeSurrogate))
        } else {
            self.push_codepoint(mark, u32::from(high))
        }
    }

    fn push_codepoint(&mut self, mark: Mark, code: u32) -> Result<(), Error> {
        let Some(ch) = char::from_u32(code) else {
            return Err(self.fail(mark, ErrorKind::InvalidUnicodeSurrogate));
        };
        let mut buf = [0u8; 4];
        self.scratch.push(ch.encode_utf8(&mut buf).as_bytes());
        Ok(())
    }

    fn parse_hex4(&mut self, mark: Mark) -> Result<u16, Error> {
        let digits = self.input.get(self.pos..self.pos + 4);
        let value = digits
            .and_then(|d| core::str::from_utf8(d).ok())
            .and_then(|s| u16::from_str_radix(s, 16).ok());
        match value {
            Some(v) => {
                self.pos += 4;
                Ok(v)
            }
            None => Err(self.fail(mark, ErrorKind::InvalidUnicodeHex)),
        }
    }

    fn parse_array(&mut self) -> Result<Value, Error> {
        self.pos += 1; // opening bracket
        self.skip_whitespace();
        let mut elements = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(JsonArray::from_iter(elements)));
        }
        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(JsonArray::from_iter(elements)));
                }
                _ => return Err(self.error(ErrorKind::MissCommaOrSquareBracket)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, Error> {
        self.pos += 1; // opening brace
        self.skip_whitespace();
        let mut members = Vec::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(JsonObject::from_iter(members)));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(self.error(ErrorKind::MissKey));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error(ErrorKind::MissColon));
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.push(Member::new(key, value));
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(JsonObject::from_iter(members)));
                }
                _ => return Err(self.error(ErrorKind::MissCommaOrCurlyBracket)),
            }
        }
    }
}
