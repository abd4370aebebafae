#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing must never panic, and a parsed tag must survive a display round trip
        if let Some(tag) = errpage::LanguageTag::parse(content) {
            let again = errpage::LanguageTag::parse(&tag.to_string());
            assert_eq!(again.as_ref(), Some(&tag));
        }
        let _ = errpage::LanguageTag::from_posix_locale(content);
    }
});
