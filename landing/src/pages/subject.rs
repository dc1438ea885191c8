// Subject page - hero, features (or coming-soon panel), feedback form
use crate::navigation::Navigation;
use crate::sections::{ComingSoon, FeatureGrid, FeedbackForm, Footer, PageHeader};
use leptos::prelude::*;
use regents_router::{Route, Subject};

#[component]
pub fn SubjectPage(subject: Subject) -> impl IntoView {
    let nav = expect_context::<Navigation>();
    let download = subject.download_url().map(str::to_string);
    let feedback_route = Route::feedback(subject.id.as_str());
    let feedback_link = nav.allows_feedback().then(|| {
        view! {
            <button
                type="button"
                class="btn btn-outline"
                on:click=move |_| nav.go(feedback_route.clone())
            >
                "Open feedback page"
            </button>
        }
    });

    let body = if subject.coming_soon {
        view! { <ComingSoon /> }.into_any()
    } else {
        view! { <FeatureGrid features=subject.features.clone() /> }.into_any()
    };

    view! {
        <div class="page subject" style=subject.theme.css_vars()>
            <PageHeader back_to=Route::Landing back_label="Back to all apps" />

            <main class="container">
                <section class="panel subject-hero">
                    <div class="badge">{subject.subtitle.clone()}</div>
                    <h1 class="hero-title">{subject.name.clone()}</h1>
                    <p class="hero-description">{subject.description.clone()}</p>
                    {download.map(|url| {
                        view! {
                            <div class="hero-actions">
                                <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                                    "Download on App Store"
                                    <span class="arrow">"→"</span>
                                </a>
                            </div>
                        }
                    })}
                </section>

                {body}

                <section class="feedback-section">
                    <FeedbackForm subject=subject.clone() />
                    {feedback_link}
                </section>
            </main>

            <Footer />
        </div>
    }
}
