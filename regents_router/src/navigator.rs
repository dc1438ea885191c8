//! Navigation controller: the single writer of the current [`Route`].
//!
//! Three kinds of event move the state machine:
//!
//! - programmatic navigation from the UI ([`Navigator::navigate`]),
//! - a back/forward notification from the host ([`Navigator::sync`]),
//! - the automatic correction of an unrecognized location, which replaces
//!   the current entry with the landing page and never pushes.
//!
//! Every transition completes inside one call, so a reader that looks at
//! [`Navigator::current`] after a call returns sees the finished state.

use tracing::debug;

use crate::error::RouteError;
use crate::history::History;
use crate::route::{Route, Router};

/// How a programmatic navigation touches history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Push,
    Replace,
}

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Pushed,
    Replaced,
    /// Host-initiated back/forward; history was not written.
    Synced,
    /// The location was rejected and replaced with the landing page.
    Corrected,
}

/// Record of one state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Route,
    pub to: Route,
    pub kind: TransitionKind,
}

impl Transition {
    /// Programmatic changes (and corrections) start the new view at the top
    /// of the document; back/forward keeps whatever the host restores.
    pub fn resets_scroll(&self) -> bool {
        !matches!(self.kind, TransitionKind::Synced)
    }
}

#[derive(Debug)]
pub struct Navigator<H> {
    router: Router,
    history: H,
    current: Route,
}

impl<H: History> Navigator<H> {
    /// Derive the initial route from the host's current location.
    pub fn new(router: Router, history: H) -> Self {
        let current = router.resolve(&history.location());
        let mut navigator = Self {
            router,
            history,
            current,
        };
        if navigator.current.is_not_found() {
            navigator.correct(Route::NotFound);
        }
        navigator
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access to the host, e.g. to simulate back/forward in tests.
    /// Call [`Navigator::sync`] afterwards.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Navigate to `route`. Fails without touching state for routes that
    /// have no path (`NotFound`, empty ids, disabled route kinds).
    pub fn navigate(&mut self, route: Route, mode: NavMode) -> Result<Transition, RouteError> {
        let target = self.router.href(&route)?;
        let kind = match mode {
            NavMode::Push => {
                self.history.push(&target);
                TransitionKind::Pushed
            }
            NavMode::Replace => {
                self.history.replace(&target);
                TransitionKind::Replaced
            }
        };
        debug!(path = %target, route = %route, ?kind, "navigated");
        let from = std::mem::replace(&mut self.current, route);
        Ok(Transition {
            from,
            to: self.current.clone(),
            kind,
        })
    }

    /// Re-derive the route after the host moved through history.
    pub fn sync(&mut self) -> Transition {
        let route = self.router.resolve(&self.history.location());
        if route.is_not_found() {
            let from = self.current.clone();
            return self.correct(from);
        }
        let from = std::mem::replace(&mut self.current, route);
        Transition {
            from,
            to: self.current.clone(),
            kind: TransitionKind::Synced,
        }
    }

    /// Send the current location home, as for an unrecognized path. The view
    /// layer calls this for subject ids it cannot resolve.
    pub fn reject(&mut self) -> Transition {
        let from = self.current.clone();
        self.correct(from)
    }

    fn correct(&mut self, from: Route) -> Transition {
        let landing = self.router.base().apply("/");
        debug!(
            location = %self.history.location(),
            path = %landing,
            "unrecognized location, replacing with landing"
        );
        self.history.replace(&landing);
        self.current = Route::Landing;
        Transition {
            from,
            to: Route::Landing,
            kind: TransitionKind::Corrected,
        }
    }
}
