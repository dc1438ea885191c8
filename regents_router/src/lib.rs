//! # regents-router
//!
//! Client-side routing core for the Regents Prep app sites.
//!
//! The sites are single-page apps: a landing page listing subject apps,
//! one marketing page per subject, and a feedback page per subject. This
//! crate owns everything between the browser location and the view that
//! gets rendered, independent of any rendering framework.
//!
//! ## Modules
//!
//! - [`path`] - trailing-slash normalization and the deployment base path
//! - [`route`] - the [`Route`] tagged union, parsing and path building
//! - [`history`] - the host history boundary and an in-memory stack
//! - [`navigator`] - the navigation state machine (push, replace, back/forward sync,
//!   automatic correction of unknown locations)
//! - [`catalog`] - the read-only subject catalog the views resolve routes against
//! - [`feedback`] - feedback form fields, validation and URL-encoded bodies
//! - [`config`] - `regents.toml` site configuration
//! - [`deploy`] - static-hosting artifacts (`_redirects`, sitemap, form skeleton)
//!
//! ## Quick Start
//!
//! ```rust
//! use regents_router::{BasePath, MemoryHistory, NavMode, Navigator, Route, RouteSet, Router};
//!
//! let router = Router::new(BasePath::new("/site/"), RouteSet::Full);
//! let mut nav = Navigator::new(router, MemoryHistory::new("/site/apps/biology"));
//! assert_eq!(nav.current(), &Route::subject("biology"));
//!
//! nav.navigate(Route::Landing, NavMode::Push).unwrap();
//! assert_eq!(nav.history().entries(), ["/site/apps/biology", "/site"]);
//! ```

pub mod catalog;
pub mod config;
pub mod deploy;
pub mod error;
pub mod feedback;
pub mod history;
pub mod navigator;
pub mod path;
pub mod route;

pub use catalog::{Catalog, Feature, Page, Subject, Theme, UnknownSubjectPolicy};
pub use config::SiteConfig;
pub use error::{CatalogError, ConfigError, DeployError, FeedbackError, RouteError};
pub use feedback::{FeedbackForm, FeedbackSubmission, SubmitState, Topic};
pub use history::{History, MemoryHistory};
pub use navigator::{NavMode, Navigator, Transition, TransitionKind};
pub use path::{BasePath, normalize};
pub use route::{Route, RouteSet, Router};
