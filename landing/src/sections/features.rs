use leptos::prelude::*;
use regents_router::Feature;

#[component]
pub fn FeatureGrid(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section class="features-grid">
            {features.into_iter().map(|feature| {
                view! {
                    <article class="feature-card">
                        <h2 class="feature-title">{feature.title}</h2>
                        <p class="feature-copy">{feature.copy}</p>
                    </article>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

/// Placeholder panel for subjects still in development. The page is live
/// so early feedback can come in.
#[component]
pub fn ComingSoon() -> impl IntoView {
    view! {
        <section class="panel coming-soon">
            <div class="badge">"In development"</div>
            <h2 class="panel-title">"Coming soon"</h2>
            <p class="panel-copy">
                "This page is intentionally live so you can submit feedback early. "
                "Content and app links will be published here when development is ready."
            </p>
        </section>
    }
}
