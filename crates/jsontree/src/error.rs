//! The parser's closed set of failure kinds.
//!
//! Parse errors are recoverable and reported through [`Error`], which pairs
//! an [`ErrorKind`] with the byte offset into the input at which the parser
//! gave up. Calling a typed accessor on a [`crate::Value`] of the wrong
//! variant, or indexing an array/object out of bounds, is a contract
//! violation rather than a parse error and panics instead — see the module
//! documentation on [`crate::Value`].

use thiserror::Error;

/// The reason a [`Parser`](crate::Parser) rejected an input.
///
/// Every variant corresponds to exactly one grammar production failing; the
/// set is closed because the grammar is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The input contained nothing but whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A literal (`null`/`true`/`false`) or number did not match the grammar.
    #[error("invalid value")]
    InvalidValue,
    /// Trailing, non-whitespace bytes followed the top-level value.
    #[error("the root value is not the only value in the input")]
    RootNotSingular,
    /// A syntactically valid number overflowed to infinity.
    #[error("number too big to represent as f64")]
    NumberTooBig,
    /// A string was never closed with a matching `"`.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A `\` was followed by a byte that does not start a known escape.
    #[error("invalid string escape sequence")]
    InvalidStringEscape,
    /// A raw control byte (< 0x20) appeared inside a string literal.
    #[error("invalid character in string literal")]
    InvalidStringChar,
    /// A `\u` escape was not followed by exactly 4 hex digits.
    #[error("invalid unicode hex digits in \\u escape")]
    InvalidUnicodeHex,
    /// A high surrogate was not paired with a following low surrogate, or a
    /// low surrogate appeared without a preceding high surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array was missing a `,` or its closing `]`.
    #[error("missing comma or closing square bracket")]
    MissCommaOrSquareBracket,
    /// An object member did not begin with a string key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing colon after object key")]
    MissColon,
    /// An object was missing a `,` or its closing `}`.
    #[error("missing comma or closing curly bracket")]
    MissCommaOrCurlyBracket,
}

/// A parse failure: the [`ErrorKind`] plus the byte offset it was detected
/// at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at byte offset {offset}")]
pub struct Error {
    /// The kind of grammar violation encountered.
    pub kind: ErrorKind,
    /// Byte offset into the input at which the parser detected the failure.
    pub offset: usize,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
