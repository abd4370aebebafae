//! File system helpers

use std::path::{Path, PathBuf};

/// True if `path` names an existing directory or regular file.
///
/// Symlinks are followed; sockets, FIFOs and device nodes do not count.
pub fn does_path_exist<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return false;
    }
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_dir() || meta.is_file(),
        Err(_) => false,
    }
}

/// True if `path` names an existing regular file (symlinks followed)
pub fn is_regular_file<P: AsRef<Path>>(path: P) -> bool {
    std::fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Contents of `path`, or an empty string if it does not exist or cannot be read
pub fn read_file<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if !does_path_exist(path) {
        return String::new();
    }
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "read failed");
            String::new()
        }
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~` (and `~user` forms) are returned unchanged,
/// as is everything when the home directory is unknown.
pub fn expand_home(path: &Path) -> PathBuf {
    let p = path.to_string_lossy();
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };

    if p == "~" {
        home
    } else if let Some(rest) = p.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}
