#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Anything strict parsing accepts must print to a document it accepts again
        if let Ok(value) = errpage::util::parse_json(content) {
            let printed = errpage::util::json_to_string(&value);
            assert!(errpage::util::parse_json(&printed).is_ok());
        }
    }
});
