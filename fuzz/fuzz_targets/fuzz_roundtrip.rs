#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsontree::{BString, JsonArray, JsonObject, Value, serialize};
use libfuzzer_sys::fuzz_target;

/// A bounded-depth, `Arbitrary`-driven generator for [`Value`] trees.
///
/// Depth is threaded through `arbitrary` rather than left to `arbitrary`'s
/// own recursion guard, so a shrunk failing case stays a small, readable
/// tree instead of whatever recursion limit happened to kick in.
struct ArbitraryValue(Value);

const MAX_DEPTH: u8 = 6;

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self(arbitrary_value(u, MAX_DEPTH)?))
    }
}

fn arbitrary_value(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<Value> {
    let max_tag: u8 = if depth == 0 { 2 } else { 5 };
    let value = match u.int_in_range(0..=max_tag)? {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2 => {
            let n: f64 = u.arbitrary()?;
            Value::Number(if n.is_finite() { n } else { 0.0 })
        }
        3 => {
            let bytes: Vec<u8> = u.arbitrary()?;
            Value::String(BString::from(bytes))
        }
        4 => {
            let len: usize = u.int_in_range(0u8..=4)?.into();
            let mut array = JsonArray::with_capacity(len);
            for _ in 0..len {
                array.push(arbitrary_value(u, depth - 1)?);
            }
            Value::Array(array)
        }
        _ => {
            let len: usize = u.int_in_range(0u8..=4)?.into();
            let mut object = JsonObject::with_capacity(len);
            for _ in 0..len {
                let key: Vec<u8> = u.arbitrary()?;
                object.set(BString::from(key), arbitrary_value(u, depth - 1)?);
            }
            Value::Object(object)
        }
    };
    Ok(value)
}

// Any tree built from finite numbers and arbitrary byte strings must survive
// a serialize/parse round trip unchanged.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut u) else {
        return;
    };
    let text = serialize(&value);
    let reparsed = jsontree::parse(text.as_slice()).expect("serializer output must parse");
    assert_eq!(reparsed, value);
});
