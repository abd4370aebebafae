//! Environment variable lookup

/// Value of `name`, or an empty string when unset or not valid UTF-8
pub fn env_var(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
