use crate::navigation::Navigation;
use leptos::prelude::*;
use regents_router::Route;

/// Top bar of a subject page: a back button plus the series name.
#[component]
pub fn PageHeader(back_to: Route, back_label: &'static str) -> impl IntoView {
    let nav = expect_context::<Navigation>();

    view! {
        <header class="page-header">
            <button
                type="button"
                class="btn btn-outline"
                on:click=move |_| {
                    if back_to == Route::Landing {
                        nav.home();
                    } else {
                        nav.go(back_to.clone());
                    }
                }
            >
                {back_label}
            </button>
            <div class="page-header-series">"Regents Prep App Series"</div>
        </header>
    }
}
