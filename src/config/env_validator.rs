//! Environment variable validation with helpful warnings
//!
//! Invalid values fall back to a default, print a warning naming the
//! variable, and suggest the closest valid value when it is a likely typo.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `default` (with a warning on stderr) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, default: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, default, &mut std::io::stderr())
    }

    /// Parse, writing any warning to `writer`
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        tracing::debug!(var = self.var_name, value, "invalid environment value");
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }

    /// `. Did you mean '<x>'?` for values within two edits of a valid one
    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist);

        match best {
            Some((suggested, dist)) if dist > 0 && dist <= 2 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Byte-wise Levenshtein distance, used for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
