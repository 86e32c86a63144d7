#![no_main]

use libfuzzer_sys::fuzz_target;

// Arbitrary bytes, valid or not, must never panic or leak: a rejected parse
// should always come back as an `Err`, never an abort.
fuzz_target!(|data: &[u8]| {
    let _ = jsontree::parse(data);
});
