//! A self-contained JSON library: a recursive-descent parser, a serializer, an
//! in-memory value tree, and a structural-mutation API over that tree.
//!
//! The crate accepts a JSON text conforming to [RFC 8259], produces an
//! in-memory [`Value`] tree, supports programmatic inspection and mutation of
//! that tree, and emits the tree back to a textual JSON form satisfying a
//! round-trip law with the parser: `parse(&serialize(&v)) == Ok(v)` for any
//! `v` containing no non-finite numbers.
//!
//! String and key payloads are [`bstr::BString`] rather than [`String`]:
//! JSON string content, once escape sequences are decoded, is not guaranteed
//! to be valid UTF-8 (the grammar permits passing bytes 0x80..0xFF through
//! transparently), so a type that can hold arbitrary bytes is required.
//!
//! # Examples
//!
//! ```
//! use jsontree::{Parser, serialize};
//!
//! let value = Parser::new().parse(br#"{"a":[1,2],"b":null}"#).unwrap();
//! assert_eq!(value["a"][1].as_f64(), 2.0);
//! assert_eq!(serialize(&value).to_string(), r#"{"a":[1,2],"b":null}"#);
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

mod config;
mod error;
mod parser;
mod scratch;
mod serializer;
mod value;

pub use bstr::BString;
pub use config::{ParserConfig, SerializerConfig};
pub use error::{Error, ErrorKind};
pub use parser::Parser;
pub use serializer::{Serializer, serialize, serialize_with};
pub use value::{JsonArray, JsonObject, Member, Value};

/// Parses `input` with the default [`ParserConfig`].
///
/// Convenience wrapper around [`Parser::new`] + [`Parser::parse`] for callers
/// that do not need to reuse a [`Parser`] or override its configuration.
///
/// # Errors
///
/// Returns [`Error`] if `input` does not conform to the JSON grammar described
/// in the crate documentation.
pub fn parse(input: &[u8]) -> Result<Value, Error> {
    Parser::new().parse(input)
}
