// SPDX-License-Identifier: AGPL-3.0-or-later
#![no_main]

use libfuzzer_sys::fuzz_target;
use taggen_core::generate_json;

// generate_json must never panic: arbitrary bytes either fail JSON
// deserialization cleanly or produce a fragment.
fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let _ = generate_json(json);
    }
});
