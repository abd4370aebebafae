//! Language Tag Value Object
//!
//! A thin wrapper over [`unic_langid::LanguageIdentifier`] exposing the
//! `language[-Script][-REGION]` decomposition used for error page lookup.
//!
//! - language: always present and never `und`
//! - script/region: `None` when absent, never empty strings
//! - variants are kept but do not take part in lookup
//! - extensions and private use (`-u-...`, `-x-...`) are dropped
//!
//! Both `-` and `_` separate subtags.

use std::fmt;

use unic_langid::LanguageIdentifier;

/// A parsed language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    id: LanguageIdentifier,
}

impl LanguageTag {
    /// Parse a tag such as `en`, `en-US`, `zh-Hant-TW`, `de-DE-1996` or `en_US`.
    ///
    /// Returns `None` if the input is not a well-formed tag or its language
    /// is undetermined.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        let id: LanguageIdentifier = strip_extensions(tag).parse().ok()?;
        if id.language.is_empty() {
            return None;
        }

        Some(Self { id })
    }

    /// Parse a POSIX locale string (`LANG`/`LC_ALL` style).
    ///
    /// `en_US.UTF-8@euro` becomes `en-US`; `C` and `POSIX` yield `None`.
    pub fn from_posix_locale(value: &str) -> Option<Self> {
        let value = value.trim();
        let value = value.split('@').next().unwrap_or(value);
        let value = value.split('.').next().unwrap_or(value);

        if value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix") {
            return None;
        }

        Self::parse(value)
    }

    /// Primary language subtag (always non-empty)
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Script subtag, if present
    pub fn script(&self) -> Option<&str> {
        self.id.script.as_ref().map(|script| script.as_str())
    }

    /// Region subtag, if present
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|region| region.as_str())
    }

    pub fn has_script(&self) -> bool {
        self.id.script.is_some()
    }

    pub fn has_region(&self) -> bool {
        self.id.region.is_some()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Cut the tag at its first singleton subtag (`u`, `t`, `x`, ...).
fn strip_extensions(tag: &str) -> String {
    tag.split(['-', '_'])
        .enumerate()
        .take_while(|(i, subtag)| *i == 0 || subtag.len() != 1)
        .map(|(_, subtag)| subtag)
        .collect::<Vec<_>>()
        .join("-")
}
