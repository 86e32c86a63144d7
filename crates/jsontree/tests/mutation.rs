#![expect(missing_docs)]

//! Structural mutation: building and editing a [`Value`] tree directly,
//! independent of parsing.

use jsontree::{JsonArray, JsonObject, Value};

#[test]
fn array_push_insert_pop_remove() {
    let mut array = JsonArray::new();
    array.push(Value::Number(1.0));
    array.push(Value::Number(2.0));
    array.insert(1, Value::Number(1.5));
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(1), Some(&Value::Number(1.5)));

    assert_eq!(array.pop(), Some(Value::Number(2.0)));
    assert_eq!(array.len(), 2);

    array.remove_range(0, 1);
    assert_eq!(array.len(), 1);
    assert_eq!(array.get(0), Some(&Value::Number(1.5)));
}

#[test]
fn array_reserve_and_shrink_do_not_change_contents() {
    let mut array = JsonArray::new();
    array.reserve(16);
    assert!(array.capacity() >= 16);
    array.push(Value::Null);
    array.shrink_to_fit();
    assert_eq!(array.len(), 1);
}

#[test]
fn object_set_overwrites_first_match_and_get_finds_it() {
    let mut object = JsonObject::new();
    object.set("x", Value::Number(1.0));
    object.set("y", Value::Number(2.0));
    object.set("x", Value::Number(99.0));

    assert_eq!(object.len(), 2);
    assert_eq!(object.get(b"x"), Some(&Value::Number(99.0)));
}

#[test]
fn object_remove_by_key_and_by_index() {
    let mut object = JsonObject::new();
    object.set("a", Value::Bool(true));
    object.set("b", Value::Bool(false));

    let removed = object.remove(b"a").unwrap();
    assert_eq!(removed.key.as_slice(), b"a");
    assert_eq!(object.len(), 1);

    let removed = object.remove_index(0);
    assert_eq!(removed.key.as_slice(), b"b");
    assert!(object.is_empty());
}

#[test]
fn value_take_and_reset_clear_a_slot_to_null() {
    let mut value = Value::Array(JsonArray::from_iter([Value::Number(1.0)]));
    let taken = value.take();
    assert!(value.is_null());
    assert_eq!(taken.as_array().len(), 1);

    let mut value = Value::Bool(true);
    value.reset();
    assert!(value.is_null());
}

#[test]
fn value_set_array_and_set_object_retag_in_place() {
    let mut value = Value::Number(1.0);
    value.set_array(4).push(Value::Null);
    assert_eq!(value.as_array().len(), 1);

    let mut value = Value::Null;
    value.set_object(2).set("k", Value::Bool(true));
    assert!(value["k"].as_bool());
}

#[test]
fn nested_mutation_through_indexing() {
    let mut root = JsonObject::new();
    root.set("items", Value::Array(JsonArray::new()));
    root.get_mut(b"items")
        .unwrap()
        .as_array_mut()
        .push(Value::Number(1.0));
    let value = Value::Object(root);
    assert_eq!(value["items"][0].as_f64(), 1.0);
}
