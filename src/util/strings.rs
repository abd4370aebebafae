//! String helpers

/// Parse a leading decimal integer, `strtol` style.
///
/// Leading ASCII whitespace and an optional sign are accepted and anything after
/// the digits is ignored (`"42px"` is 42). Returns `None` when there are no
/// digits or the value does not fit in an `i32`.
pub fn str_to_int(s: &str) -> Option<i32> {
    let s = s.trim_start_matches(is_c_space);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        if value > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    if negative {
        value = -value;
    }

    i32::try_from(value).ok()
}

// C `isspace`, which also covers '\x0b'
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// `str_to_int`, or `default` if the string does not hold an integer
pub fn str_to_int_with_default(s: &str, default: i32) -> i32 {
    str_to_int(s).unwrap_or(default)
}

/// Split on `delimiter` the way line-oriented readers do.
///
/// A single trailing empty field is dropped, so `"a,b,"` gives `["a", "b"]`
/// and an empty string gives no fields at all.
pub fn split_string(s: &str, delimiter: char) -> Vec<String> {
    let mut fields: Vec<String> = s.split(delimiter).map(str::to_string).collect();
    if fields.last().is_some_and(|last| last.is_empty()) {
        fields.pop();
    }
    fields
}

/// Strip leading and trailing whitespace
pub fn trim_string(s: &str) -> String {
    s.trim().to_string()
}

/// Replace every non-overlapping occurrence of `search`, left to right.
///
/// Text produced by a replacement is not searched again. An empty `search`
/// leaves the input unchanged.
pub fn replace_substr(input: &mut String, search: &str, replacement: &str) {
    if search.is_empty() || !input.contains(search) {
        return;
    }
    *input = input.replace(search, replacement);
}
