#![no_main]

//! Fuzz target for batch payload decoding.
//!
//! Feeds arbitrary bytes through the batch decoder to ensure malformed
//! inputs are rejected as errors rather than panics, and that every
//! decoded record still renders a well-formed identifier.

use libfuzzer_sys::fuzz_target;
use siphon_core::decode_batch;

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = decode_batch(data) {
        for record in records {
            let rendered = record.guid.to_string();
            assert_eq!(rendered.len(), 36);
        }
    }
});
