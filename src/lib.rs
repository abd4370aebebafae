//! errpage - locale-aware error page lookup
//!
//! Given the location of a generic error page and a language tag, errpage
//! builds the ordered list of localized variants to probe (most specific
//! first, the given location last) and can pick the first one on disk.
//! The `util` module carries the small path, URI, string and JSON helpers
//! the lookup is used alongside.

pub mod config;
pub mod error;
pub mod error_page;
pub mod language_tag;
pub mod trace;
pub mod util;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LogLevel};
pub use error::{ErrpageError, ErrpageResult};
pub use error_page::{
    error_page_paths, find_error_page, CandidateList, ErrorPageResolver, ResourceLayout,
};
pub use language_tag::LanguageTag;
pub use trace::{NoopTraceSink, ScopeTrace, TraceSink, TracingTraceSink};
