//! URL and `file:` URI helpers, built on the `url` crate

use std::path::Path;

use url::{Host, Url};

/// Host component of `url`, or an empty string.
///
/// Userinfo and port are not part of the result. IPv6 literals are returned
/// without brackets. Relative references and URLs without an authority
/// (`mailto:`, `file:///`) yield an empty string.
pub fn hostname(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(url, %err, "not an absolute URL");
            return String::new();
        }
    };

    match parsed.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    }
}

/// Local path for a `file:` URI, or an empty string.
///
/// Percent-encoded characters are decoded. Other schemes and URIs naming a
/// remote host are rejected.
pub fn uri_to_local(uri: &str) -> String {
    let Ok(parsed) = Url::parse(uri) else {
        return String::new();
    };
    if parsed.scheme() != "file" {
        return String::new();
    }
    match parsed.to_file_path() {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(()) => String::new(),
    }
}

/// `file:` URI for an absolute local path, or an empty string for relative paths
pub fn local_to_uri<P: AsRef<Path>>(path: P) -> String {
    Url::from_file_path(path.as_ref())
        .map(String::from)
        .unwrap_or_default()
}
