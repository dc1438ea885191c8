// Regents Prep Apps site, Leptos 0.8 CSR
//
// Build with `trunk build --release`; set REGENTS_BASE_PATH when the site is
// served from a sub-path (e.g. `/regents/`).

mod browser;
mod navigation;
mod pages;
mod sections;

use leptos::ev;
use leptos::prelude::*;
use regents_router::{Catalog, FeedbackForm, Page, SiteConfig, UnknownSubjectPolicy};

use navigation::Navigation;
use pages::*;

/// Read-only site data shared through context.
#[derive(Clone)]
pub struct Site {
    pub catalog: Catalog,
    pub feedback: FeedbackForm,
    pub unknown_subject: UnknownSubjectPolicy,
}

fn site_config() -> SiteConfig {
    SiteConfig {
        base_path: option_env!("REGENTS_BASE_PATH").unwrap_or("/").to_string(),
        ..SiteConfig::default()
    }
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = site_config();
    let site = Site {
        catalog: config.catalog().unwrap_or_default(),
        feedback: config.feedback.clone(),
        unknown_subject: config.unknown_subject,
    };
    let nav = Navigation::new(config.router());
    provide_context(nav);
    provide_context(site.clone());

    let _popstate = window_event_listener(ev::popstate, move |_| nav.sync());

    let catalog = site.catalog.clone();
    let policy = site.unknown_subject;
    Effect::new(move || {
        let route = nav.route();
        if policy == UnknownSubjectPolicy::RedirectHome && !catalog.accepts(&route) {
            nav.reject();
        }
    });

    let catalog = site.catalog;
    view! {
        {move || match catalog.resolve(&nav.route()) {
            Page::Landing => view! { <LandingPage /> }.into_any(),
            Page::Subject(subject) => view! { <SubjectPage subject=subject.clone() /> }.into_any(),
            Page::Feedback(subject) => view! { <FeedbackPage subject=subject.clone() /> }.into_any(),
            Page::Missing => view! { "" }.into_any(),
        }}
    }
}
