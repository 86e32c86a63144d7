//! Serializing a [`Value`] tree back to textual JSON.
//!
//! [`serialize`] walks a [`Value`] and writes its textual form into a
//! [`ScratchBuffer`], the same buffer type the parser uses for string
//! decoding, then hands the caller ownership of the resulting byte run as a
//! [`BString`]. No whitespace is ever emitted between tokens; pretty-printing
//! is out of scope (see the crate-level documentation).

use bstr::BString;

use crate::config::SerializerConfig;
use crate::scratch::ScratchBuffer;
use crate::value::{JsonArray, JsonObject, Value};

/// Serializes `value` with the default [`SerializerConfig`].
#[must_use]
pub fn serialize(value: &Value) -> BString {
    Serializer::new().serialize(value)
}

/// Serializes `value` with an explicit [`SerializerConfig`].
#[must_use]
pub fn serialize_with(value: &Value, config: SerializerConfig) -> BString {
    Serializer::with_config(config).serialize(value)
}

/// Writes a [`Value`] tree to textual JSON.
///
/// A `Serializer` holds nothing but its configuration; each call to
/// [`serialize`](Self::serialize) allocates its own scratch buffer, so a
/// single `Serializer` can be reused across unrelated calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    config: SerializerConfig,
}

impl Serializer {
    /// Creates a serializer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Writes `value`'s textual JSON form and returns it as an owned byte
    /// run. The returned buffer is not NUL-terminated: `BString` is already
    /// length-tagged, so there is nothing for a trailing NUL to buy callers.
    #[must_use]
    pub fn serialize(&self, value: &Value) -> BString {
        let span = tracing::debug_span!("serialize");
        let _enter = span.enter();
        let mut buf = ScratchBuffer::with_capacity(self.config.initial_scratch_capacity);
        write_value(&mut buf, value);
        let bytes = buf.into_vec();
        tracing::debug!(output_len = bytes.len(), "serialize complete");
        BString::from(bytes)
    }
}

fn write_value(buf: &mut ScratchBuffer, value: &Value) {
    match value {
        Value::Null => buf.push(b"null"),
        Value::Bool(true) => buf.push(b"true"),
        Value::Bool(false) => buf.push(b"false"),
        Value::Number(n) => write_number(buf, *n),
        Value::String(s) => write_string(buf, s.as_slice()),
        Value::Array(a) => write_array(buf, a),
        Value::Object(o) => write_object(buf, o),
    }
}

/// Formats `n` using Rust's shortest round-tripping `f64` representation.
///
/// The reference implementation reserves a fixed 32-byte scratch per number
/// and formats with `%.17g`; `f64::to_string` already produces the shortest
/// decimal string that round-trips back to the same `f64` (Rust's formatter
/// already omits a trailing `.0` for integral values, e.g. `1.0` formats as
/// `"1"`), so the fixed-width scratch below is sized generously rather than
/// tightly and is truncated to the bytes actually written. Unlike `%.17g`,
/// `to_string` never switches to exponential notation; both are valid JSON
/// numbers and both round-trip, so this is a stylistic, not semantic,
/// difference from the reference implementation.
fn write_number(buf: &mut ScratchBuffer, n: f64) {
    debug_assert!(n.is_finite(), "non-finite numbers must be rejected by the parser");
    let mark = buf.mark();
    buf.push(&[0u8; 32]);
    let text = n.to_string();
    buf.truncate_to(mark);
    buf.push(text.as_bytes());
}

fn write_string(buf: &mut ScratchBuffer, bytes: &[u8]) {
    let mark = buf.mark();
    buf.push(&vec![0u8; 6 * bytes.len() + 2]);
    buf.truncate_to(mark);

    buf.push_byte(b'"');
    for &byte in bytes {
        match byte {
            b'"' => buf.push(b"\\\""),
            b'\\' => buf.push(b"\\\\"),
            0x08 => buf.push(b"\\b"),
            0x0C => buf.push(b"\\f"),
            b'\n' => buf.push(b"\\n"),
            b'\r' => buf.push(b"\\r"),
            b'\t' => buf.push(b"\\t"),
            b if b < 0x20 => {
                let hex = format!("\\u{b:04X}");
                buf.push(hex.as_bytes());
            }
            b => buf.push_byte(b),
        }
    }
    buf.push_byte(b'"');
}

fn write_array(buf: &mut ScratchBuffer, array: &JsonArray) {
    buf.push_byte(b'[');
    for (i, element) in array.iter().enumerate() {
        if i > 0 {
            buf.push_byte(b',');
        }
        write_value(buf, element);
    }
    buf.push_byte(b']');
}

fn write_object(buf: &mut ScratchBuffer, object: &JsonObject) {
    buf.push_byte(b'{');
    for (i, member) in object.iter().enumerate() {
        if i > 0 {
            buf.push_byte(b',');
        }
        write_string(buf, member.key.as_slice());
        buf.push_byte(b':');
        write_value(buf, &member.value);
    }
    buf.push_byte(b'}');
}
