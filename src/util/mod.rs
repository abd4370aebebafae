//! Small stateless helpers
//!
//! - `strings`: integer parsing, splitting, trimming, substring replacement
//! - `env`: environment variable lookup
//! - `fs`: existence checks, lenient reads, `~` expansion
//! - `uri`: hostname extraction and `file:` URI conversion
//! - `json`: strict parsing and pretty printing

pub mod env;
pub mod fs;
pub mod json;
pub mod strings;
pub mod uri;

pub use env::env_var;
pub use fs::{does_path_exist, expand_home, read_file};
pub use json::{json_to_string, parse_json, string_to_json};
pub use strings::{replace_substr, split_string, str_to_int, str_to_int_with_default, trim_string};
pub use uri::{hostname, local_to_uri, uri_to_local};
