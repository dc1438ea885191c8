//! Error types for the routing core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when turning a [`crate::Route`] back into a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// `NotFound` is only ever the result of parsing; nothing navigates to it.
    #[error("NotFound has no canonical path")]
    NoCanonicalPath,
    /// `/apps/` with an empty segment would not parse back to the same route.
    #[error("subject id must not be empty")]
    EmptySubject,
    /// The configured route set does not include this kind of route.
    #[error("route {0} is not enabled in this route set")]
    Unsupported(String),
}

/// Errors raised while building a [`crate::Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("subject at position {0} has an empty id")]
    EmptyId(usize),
    #[error("duplicate subject id `{0}`")]
    DuplicateId(String),
}

/// Validation errors for a feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
}

/// Errors raised while loading a [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while writing deployment artifacts.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Route(#[from] RouteError),
}
