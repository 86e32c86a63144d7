//! Parses a tool-call-shaped JSON document, inspects and edits its
//! `moderation` field, and serializes the edited tree back out.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsontree --example moderation_decision
//! ```

use jsontree::{Value, parse, serialize};

fn main() {
    let input = br#"{
        "moderation": {"decision": "allow", "reason": null},
        "filename": "example.rs",
        "language": "rust",
        "code": "fn main() {}"
    }"#;

    let mut value = parse(input).expect("well-formed input");

    let decision = value["moderation"]["decision"].as_bytes();
    println!("moderation decision: {}", String::from_utf8_lossy(decision));

    if decision == b"allow" {
        value
            .as_object_mut()
            .get_mut(b"moderation")
            .expect("moderation field is present")
            .as_object_mut()
            .set("reviewed_by", Value::from("moderation_decision example"));
    }

    println!("{}", serialize(&value));
}
