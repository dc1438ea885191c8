use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-title">"Regents Prep Apps"</span>
                <p class="footer-copyright">
                    "Teacher-built learning tools for New York State Regents exams."
                </p>
            </div>
        </footer>
    }
}
