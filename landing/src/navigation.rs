//! Reactive wrapper around the router's [`Navigator`].
//!
//! The navigator stays the only writer of the current route; this handle
//! mirrors each finished transition into a signal the views subscribe to.

use leptos::prelude::*;
use regents_router::{NavMode, Navigator, Route, Router, Transition};
use wasm_bindgen::JsValue;

use crate::browser::{self, BrowserHistory};

#[derive(Clone, Copy)]
pub struct Navigation {
    navigator: StoredValue<Navigator<BrowserHistory>>,
    route: RwSignal<Route>,
}

impl Navigation {
    /// Reads the initial location (correcting it if unrecognized).
    pub fn new(router: Router) -> Self {
        let navigator = Navigator::new(router, BrowserHistory);
        let route = RwSignal::new(navigator.current().clone());
        Self {
            navigator: StoredValue::new(navigator),
            route,
        }
    }

    /// Current route, tracked.
    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn allows_feedback(&self) -> bool {
        self.navigator
            .with_value(|nav| nav.router().route_set().allows_feedback())
    }

    /// Push navigation, as for a click.
    pub fn go(&self, route: Route) {
        self.navigate(route, NavMode::Push);
    }

    pub fn home(&self) {
        self.go(Route::Landing);
    }

    pub fn navigate(&self, route: Route, mode: NavMode) {
        let mut outcome = None;
        self.navigator
            .update_value(|nav| outcome = Some(nav.navigate(route, mode)));
        match outcome {
            Some(Ok(transition)) => self.apply(transition),
            Some(Err(e)) => browser::warn(
                "[regents] navigation refused",
                &JsValue::from_str(&e.to_string()),
            ),
            None => {}
        }
    }

    /// `popstate` handler.
    pub fn sync(&self) {
        let mut outcome = None;
        self.navigator.update_value(|nav| outcome = Some(nav.sync()));
        if let Some(transition) = outcome {
            self.apply(transition);
        }
    }

    /// Send an unresolvable subject page home.
    pub fn reject(&self) {
        let mut outcome = None;
        self.navigator.update_value(|nav| outcome = Some(nav.reject()));
        if let Some(transition) = outcome {
            self.apply(transition);
        }
    }

    fn apply(&self, transition: Transition) {
        if transition.resets_scroll() {
            browser::scroll_to_top();
        }
        self.route.set(transition.to);
    }
}
