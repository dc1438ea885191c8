// Feedback page - the form on its own, back link to the subject
use crate::sections::{FeedbackForm, Footer, PageHeader};
use leptos::prelude::*;
use regents_router::{Route, Subject};

#[component]
pub fn FeedbackPage(subject: Subject) -> impl IntoView {
    let back_to = Route::subject(subject.id.as_str());

    view! {
        <div class="page feedback" style=subject.theme.css_vars()>
            <PageHeader back_to=back_to back_label="Back to app page" />
            <main class="container">
                <h1 class="hero-title">{format!("{} feedback", subject.name)}</h1>
                <FeedbackForm subject=subject.clone() />
            </main>
            <Footer />
        </div>
    }
}
