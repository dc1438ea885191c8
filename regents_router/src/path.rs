//! Path normalization and the deployment base-path prefix.
//!
//! All routing happens on paths relative to the base path. The prefix is
//! stripped from the browser location before matching and re-applied before
//! anything is written back to history.

use std::fmt;

/// Collapse trailing slashes. Empty input and input made only of slashes
/// become `"/"`; everything else is returned untouched.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// The fixed prefix the whole site is deployed under, e.g. `/regents`.
///
/// Normalized once at construction. A root or empty prefix disables both
/// stripping and applying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    prefix: String,
}

impl BasePath {
    /// Build from a raw value such as Vite's `BASE_URL` (`"/"`, `"/site/"`).
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw.trim());
        if normalized == "/" {
            return Self::root();
        }
        let prefix = if normalized.starts_with('/') {
            normalized
        } else {
            format!("/{normalized}")
        };
        Self { prefix }
    }

    /// No prefix: the site lives at the origin root.
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_empty()
    }

    /// The normalized prefix, empty for the root.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Remove the prefix from a browser location.
    ///
    /// Locations outside the prefix come back normalized but otherwise
    /// unchanged; they will fail to match any route. The prefix only matches
    /// on a segment boundary, so `/sitefoo` is not under `/site`.
    pub fn strip(&self, path: &str) -> String {
        let normalized = normalize(path);
        if self.is_root() {
            return normalized;
        }
        match normalized.strip_prefix(self.prefix.as_str()) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => normalized,
        }
    }

    /// Prefix a site-relative path for writing to history.
    pub fn apply(&self, path: &str) -> String {
        let normalized = normalize(path);
        if self.is_root() {
            normalized
        } else if normalized == "/" {
            self.prefix.clone()
        } else {
            format!("{}{}", self.prefix, normalized)
        }
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.prefix)
        }
    }
}
