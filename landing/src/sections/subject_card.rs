use crate::navigation::Navigation;
use leptos::prelude::*;
use regents_router::{Route, Subject};

#[component]
pub fn SubjectCard(subject: Subject) -> impl IntoView {
    let nav = expect_context::<Navigation>();
    let id = subject.id.clone();

    view! {
        <button
            type="button"
            class="subject-card"
            style=subject.theme.css_vars()
            on:click=move |_| nav.go(Route::subject(id.as_str()))
        >
            <div class="subject-card-top">
                <span class="subject-icon">{initials(&subject.name)}</span>
                <span class="subject-subtitle">{subject.subtitle.clone()}</span>
            </div>
            <h3 class="subject-name">{subject.name.clone()}</h3>
            <p class="subject-description">{subject.description.clone()}</p>
            <div class="subject-cta">
                "View Page"
                <span class="arrow">"→"</span>
            </div>
        </button>
    }
}

/// Monogram for the icon tile, e.g. "Earth & Space Science" -> "ES".
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
