//! Site configuration.
//!
//! Loads an optional `regents.toml`. Every section has a default, so an
//! empty file (or no file) describes the stock five-subject site at the
//! origin root.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{Catalog, Subject, UnknownSubjectPolicy};
use crate::error::ConfigError;
use crate::feedback::FeedbackForm;
use crate::path::BasePath;
use crate::route::{RouteSet, Router};

/// Default file name looked up next to the site sources.
pub const CONFIG_FILE: &str = "regents.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Deployment sub-path, e.g. `"/regents/"`. Empty or `"/"` for the root.
    pub base_path: String,
    pub route_set: RouteSet,
    pub unknown_subject: UnknownSubjectPolicy,
    pub feedback: FeedbackForm,
    /// Replaces the built-in catalog when non-empty.
    pub subjects: Vec<Subject>,
}

impl SiteConfig {
    /// Load and validate a config file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.catalog()?;
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or
    /// broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default site config");
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn router(&self) -> Router {
        Router::new(BasePath::new(&self.base_path), self.route_set)
    }

    /// The configured catalog, or the built-in one when none is given.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        if self.subjects.is_empty() {
            Ok(Catalog::default())
        } else {
            Ok(Catalog::new(self.subjects.clone())?)
        }
    }
}
