#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = errpage::util::hostname(content);
        let _ = errpage::util::uri_to_local(content);
        let _ = errpage::util::str_to_int(content);
    }
});
