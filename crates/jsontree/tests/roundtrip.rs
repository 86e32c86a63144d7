#![expect(missing_docs)]

//! Property: parsing the serialized form of any finite-number [`Value`]
//! reproduces the original value.

use jsontree::{BString, JsonArray, JsonObject, Value, parse, serialize};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

#[derive(Clone, Debug)]
struct FiniteValue(Value);

fn arbitrary_at_depth(g: &mut Gen, depth: u32) -> Value {
    let choices: &[u32] = if depth == 0 { &[0, 1, 2, 3] } else { &[0, 1, 2, 3, 4, 5] };
    match *g.choose(choices).unwrap() {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => {
            let n = f64::arbitrary(g);
            Value::Number(if n.is_finite() { n } else { 0.0 })
        }
        3 => Value::String(BString::from(String::arbitrary(g))),
        4 => {
            let len = usize::arbitrary(g) % 4;
            let mut array = JsonArray::with_capacity(len);
            for _ in 0..len {
                array.push(arbitrary_at_depth(g, depth - 1));
            }
            Value::Array(array)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut object = JsonObject::with_capacity(len);
            for _ in 0..len {
                let key = String::arbitrary(g);
                object.set(key.as_str(), arbitrary_at_depth(g, depth - 1));
            }
            Value::Object(object)
        }
    }
}

impl Arbitrary for FiniteValue {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_at_depth(g, 3))
    }
}

#[quickcheck]
fn serialize_then_parse_round_trips(value: FiniteValue) -> bool {
    let text = serialize(&value.0);
    parse(text.as_slice()) == Ok(value.0)
}

#[test]
fn specific_tree_round_trips() {
    let mut object = JsonObject::new();
    object.set("name", Value::String(BString::from("ok")));
    object.set(
        "items",
        Value::Array(JsonArray::from_iter([
            Value::Number(1.0),
            Value::Number(-2.5),
            Value::Bool(false),
            Value::Null,
        ])),
    );
    let value = Value::Object(object);
    let text = serialize(&value);
    assert_eq!(parse(text.as_slice()).unwrap(), value);
}
