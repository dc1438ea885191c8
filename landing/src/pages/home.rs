// Landing page - every subject app as a card
use crate::Site;
use crate::sections::{Footer, SubjectCard};
use leptos::prelude::*;
use regents_router::Theme;

#[component]
pub fn LandingPage() -> impl IntoView {
    let site = expect_context::<Site>();
    let featured = site.catalog.featured().cloned();
    let subjects = site.catalog.subjects().to_vec();

    view! {
        <div class="page landing" style=Theme::default().css_vars()>
            <header class="landing-header">
                <div class="brand">"Regents Prep Apps"</div>
            </header>

            <section class="landing-hero">
                <div>
                    <p class="eyebrow">"Teacher-built learning tools"</p>
                    <h1 class="hero-title">"Choose your Regents prep app"</h1>
                    <p class="hero-description">
                        "Every app uses the same clean experience with its own subject-specific color identity. "
                        "Earth & Space Science is live now. Other subjects are coming soon."
                    </p>
                </div>
                {featured.map(|subject| {
                    view! {
                        <div class="release-panel">
                            <p class="release-label">"Current release"</p>
                            <h2 class="release-name">{subject.name}</h2>
                            <p class="release-copy">
                                "Interactive marketing and support page now available."
                            </p>
                        </div>
                    }
                })}
            </section>

            <section class="subject-grid">
                {subjects.into_iter().map(|subject| {
                    view! { <SubjectCard subject=subject /> }
                }).collect::<Vec<_>>()}
            </section>

            <Footer />
        </div>
    }
}
