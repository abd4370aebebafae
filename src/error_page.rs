//! Error Page Path Resolution
//!
//! Builds the ordered list of locations to probe for a localized error page.
//! For a base location `<dir>/<file>` and tag `lang-Script-REGION`:
//!
//! ```text
//! <dir>/resources/<lang>/<Script>/<REGION>/html/<file>
//! <dir>/resources/<lang>/<REGION>/html/<file>
//! <dir>/resources/<lang>/html/<file>
//! <dir>/resources/html/<file>
//! <base, exactly as given>
//! ```
//!
//! `<dir>` is the canonicalized parent directory. Subtags the tag does not
//! carry drop their candidate; an unparseable tag leaves only the last two.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ErrpageError, ErrpageResult};
use crate::language_tag::LanguageTag;
use crate::trace::{NoopTraceSink, ScopeTrace, TraceSink};
use crate::util::fs::is_regular_file;

/// Directory names used below the error page's parent directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLayout {
    #[serde(default = "default_resources_dir")]
    pub resources_dir: String,
    #[serde(default = "default_html_dir")]
    pub html_dir: String,
}

impl Default for ResourceLayout {
    fn default() -> Self {
        Self {
            resources_dir: default_resources_dir(),
            html_dir: default_html_dir(),
        }
    }
}

fn default_resources_dir() -> String {
    "resources".to_string()
}

fn default_html_dir() -> String {
    "html".to_string()
}

/// Ordered candidate locations, highest priority first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateList(Vec<PathBuf>);

impl CandidateList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&PathBuf> {
        self.0.first()
    }

    /// The last-resort fallback (the base location as given)
    pub fn last(&self) -> Option<&PathBuf> {
        self.0.last()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl IntoIterator for CandidateList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Resolves localized error page candidates
pub struct ErrorPageResolver<'a> {
    layout: ResourceLayout,
    trace: &'a dyn TraceSink,
}

impl Default for ErrorPageResolver<'_> {
    fn default() -> Self {
        Self::new(ResourceLayout::default())
    }
}

impl<'a> ErrorPageResolver<'a> {
    pub fn new(layout: ResourceLayout) -> Self {
        Self {
            layout,
            trace: &NoopTraceSink,
        }
    }

    /// Report resolution steps to `trace`
    pub fn with_trace(mut self, trace: &'a dyn TraceSink) -> Self {
        self.trace = trace;
        self
    }

    pub fn layout(&self) -> &ResourceLayout {
        &self.layout
    }

    /// Build the candidate list for `base` and `language`.
    ///
    /// An empty `base` yields an empty list. A `language` that does not parse
    /// only removes the language-specific candidates.
    ///
    /// # Errors
    ///
    /// `ErrpageError::PathResolution` if the parent directory of `base`
    /// cannot be canonicalized.
    pub fn resolve(&self, base: &str, language: &str) -> ErrpageResult<CandidateList> {
        let _guard = ScopeTrace::function(self.trace, "error_page_paths");

        if base.is_empty() {
            return Ok(CandidateList::default());
        }

        let base_path = Path::new(base);
        let (search_dir, file_name) = split_location(base_path)?;
        tracing::debug!(dir = %search_dir.display(), "canonical error page directory");

        let resources = search_dir.join(&self.layout.resources_dir);
        let html = self.layout.html_dir.as_str();
        let mut candidates = Vec::with_capacity(5);

        match LanguageTag::parse(language) {
            Some(tag) => {
                tracing::debug!(%tag, "localized error page lookup");
                let lang_dir = resources.join(tag.language());

                if let Some(script) = tag.script() {
                    let mut dir = lang_dir.join(script);
                    if let Some(region) = tag.region() {
                        dir.push(region);
                    }
                    candidates.push(dir.join(html).join(file_name));
                }
                if let Some(region) = tag.region() {
                    candidates.push(lang_dir.join(region).join(html).join(file_name));
                }
                candidates.push(lang_dir.join(html).join(file_name));
            }
            None => {
                tracing::debug!(language, "language tag not recognized, skipping localized candidates");
            }
        }

        candidates.push(resources.join(html).join(file_name));
        candidates.push(base_path.to_path_buf());

        for candidate in &candidates {
            self.trace.item("candidate", &candidate.to_string_lossy());
        }

        Ok(CandidateList(candidates))
    }

    /// First candidate that exists as a regular file.
    ///
    /// `Ok(None)` means nothing on disk matched, including the base itself.
    pub fn find(&self, base: &str, language: &str) -> ErrpageResult<Option<PathBuf>> {
        let candidates = self.resolve(base, language)?;
        let found = candidates.into_iter().find(|c| is_regular_file(c));
        match &found {
            Some(path) => tracing::debug!(path = %path.display(), "error page found"),
            None => tracing::debug!(base, "no error page candidate exists"),
        }
        Ok(found)
    }
}

/// Candidate list for `base` and `language` using the default layout
pub fn error_page_paths(base: &str, language: &str) -> ErrpageResult<CandidateList> {
    ErrorPageResolver::default().resolve(base, language)
}

/// First existing error page for `base` and `language` using the default layout
pub fn find_error_page(base: &str, language: &str) -> ErrpageResult<Option<PathBuf>> {
    ErrorPageResolver::default().find(base, language)
}

/// Split a location into its canonical parent directory and file name.
fn split_location(base: &Path) -> ErrpageResult<(PathBuf, &std::ffi::OsStr)> {
    let resolution_error = |source: io::Error| ErrpageError::PathResolution {
        path: base.to_path_buf(),
        source,
    };

    let file_name = base.file_name().ok_or_else(|| {
        resolution_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "location has no file name",
        ))
    })?;

    let parent = match base.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let search_dir = parent.canonicalize().map_err(resolution_error)?;
    Ok((search_dir, file_name))
}
