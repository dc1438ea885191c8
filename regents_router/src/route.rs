//! Route model: parse a site-relative path into a [`Route`] and build the
//! canonical path back from one.
//!
//! ```text
//! /                          -> Landing
//! /apps/{segment}/feedback   -> SubjectFeedback
//! /apps/{segment}            -> SubjectPage
//! anything else              -> NotFound
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouteError;
use crate::path::{BasePath, normalize};

const APPS_PREFIX: &str = "/apps/";
const FEEDBACK_SUFFIX: &str = "/feedback";

/// Where the application currently is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Landing,
    SubjectPage { subject_id: String },
    SubjectFeedback { subject_id: String },
    NotFound,
}

impl Route {
    pub fn subject(id: impl Into<String>) -> Self {
        Route::SubjectPage {
            subject_id: id.into(),
        }
    }

    pub fn feedback(id: impl Into<String>) -> Self {
        Route::SubjectFeedback {
            subject_id: id.into(),
        }
    }

    /// Subject id carried by the route, if any.
    pub fn subject_id(&self) -> Option<&str> {
        match self {
            Route::SubjectPage { subject_id } | Route::SubjectFeedback { subject_id } => {
                Some(subject_id)
            }
            Route::Landing | Route::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound)
    }

    /// Parse a site-relative path with every route enabled.
    pub fn parse(path: &str) -> Route {
        RouteSet::Full.parse(path)
    }

    /// Canonical site-relative path for this route (no base path).
    pub fn to_path(&self) -> Result<String, RouteError> {
        match self {
            Route::Landing => Ok("/".to_string()),
            Route::SubjectPage { subject_id } => {
                Ok(format!("{APPS_PREFIX}{}", encode_segment(subject_id)?))
            }
            Route::SubjectFeedback { subject_id } => Ok(format!(
                "{APPS_PREFIX}{}{FEEDBACK_SUFFIX}",
                encode_segment(subject_id)?
            )),
            Route::NotFound => Err(RouteError::NoCanonicalPath),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Landing => f.write_str("landing"),
            Route::SubjectPage { subject_id } => write!(f, "subject:{subject_id}"),
            Route::SubjectFeedback { subject_id } => write!(f, "feedback:{subject_id}"),
            Route::NotFound => f.write_str("not-found"),
        }
    }
}

/// Which states the route machine knows about.
///
/// `SubjectsOnly` is the reduced two-state site (landing and subject pages);
/// a feedback path is just another unrecognized path there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteSet {
    #[default]
    Full,
    SubjectsOnly,
}

impl RouteSet {
    pub fn allows_feedback(self) -> bool {
        matches!(self, RouteSet::Full)
    }

    /// Match a site-relative path. First match wins.
    pub fn parse(self, path: &str) -> Route {
        let path = normalize(path);
        if path == "/" {
            return Route::Landing;
        }
        let Some(rest) = path.strip_prefix(APPS_PREFIX) else {
            return Route::NotFound;
        };

        if self.allows_feedback() {
            if let Some(segment) = rest.strip_suffix(FEEDBACK_SUFFIX).filter(|s| is_segment(s)) {
                return match decode_segment(segment) {
                    Some(subject_id) => Route::SubjectFeedback { subject_id },
                    None => Route::NotFound,
                };
            }
        }

        if is_segment(rest) {
            return match decode_segment(rest) {
                Some(subject_id) => Route::SubjectPage { subject_id },
                None => Route::NotFound,
            };
        }

        Route::NotFound
    }

    pub fn supports(self, route: &Route) -> bool {
        match route {
            Route::SubjectFeedback { .. } => self.allows_feedback(),
            _ => true,
        }
    }
}

/// Base path plus route set: everything needed to go between browser
/// locations and routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    base: BasePath,
    routes: RouteSet,
}

impl Router {
    pub fn new(base: BasePath, routes: RouteSet) -> Self {
        Self { base, routes }
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn route_set(&self) -> RouteSet {
        self.routes
    }

    /// Route for a full browser location (base path included).
    pub fn resolve(&self, location: &str) -> Route {
        let relative = self.base.strip(location);
        let route = self.routes.parse(&relative);
        debug!(location, relative = %relative, route = %route, "resolved location");
        route
    }

    /// Full browser path (base path included) for a route.
    pub fn href(&self, route: &Route) -> Result<String, RouteError> {
        if !self.routes.supports(route) {
            return Err(RouteError::Unsupported(route.to_string()));
        }
        Ok(self.base.apply(&route.to_path()?))
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/')
}

fn encode_segment(id: &str) -> Result<String, RouteError> {
    if id.is_empty() {
        return Err(RouteError::EmptySubject);
    }
    Ok(urlencoding::encode(id).into_owned())
}

/// Percent-decode a path segment. Malformed escapes and invalid UTF-8 yield
/// `None` so the caller treats the path as unrecognized.
fn decode_segment(segment: &str) -> Option<String> {
    if has_malformed_escape(segment) {
        debug!(segment, "malformed percent escape in path segment");
        return None;
    }
    match urlencoding::decode(segment) {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(err) => {
            debug!(segment, error = %err, "path segment is not valid UTF-8");
            None
        }
    }
}

fn has_malformed_escape(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}
