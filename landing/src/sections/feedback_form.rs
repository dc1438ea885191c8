//! Feedback form tagged with the subject it is shown for.
//!
//! Submission posts the urlencoded fields to the form backend and then shows
//! the thank-you panel whether or not the request went through.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use regents_router::{FeedbackSubmission, Subject, SubmitState, Topic};

use crate::Site;
use crate::browser;

#[component]
pub fn FeedbackForm(subject: Subject) -> impl IntoView {
    let site = expect_context::<Site>();
    let form = site.feedback;

    let (state, set_state) = signal(SubmitState::Idle);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (topic, set_topic) = signal(Topic::default());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let submitted = Memo::new(move |_| state.get() == SubmitState::Submitted);

    let form_name = form.form_name.clone();
    let app_id = subject.id.clone();
    let app_name = subject.name.clone();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match FeedbackSubmission::new(
            &form,
            &subject,
            &name.get_untracked(),
            &email.get_untracked(),
            topic.get_untracked(),
            &message.get_untracked(),
        ) {
            Ok(submission) => submission,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let mut started = false;
        set_state.update(|s| started = s.begin());
        if !started {
            return;
        }
        set_error.set(None);

        let endpoint = form.endpoint.clone();
        spawn_local(async move {
            let outcome = browser::post_form(&endpoint, submission.encode()).await;
            if let Err(e) = &outcome {
                browser::warn("[regents] feedback post failed", e);
            }
            set_state.update(|s| s.finish(outcome));
        });
    };

    view! {
        {move || {
            if submitted.get() {
                view! {
                    <div class="panel feedback-thanks">
                        <div class="feedback-check">"✓"</div>
                        <h3 class="panel-title">"Thanks for the feedback"</h3>
                        <p class="panel-copy">
                            "Your message was sent and tagged for " {app_name.clone()} "."
                        </p>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <form
                        name=form_name.clone()
                        method="POST"
                        data-netlify="true"
                        class="panel feedback-form"
                        on:submit=on_submit.clone()
                    >
                        <input type="hidden" name="form-name" value=form_name.clone() />
                        <input type="hidden" name="app_id" value=app_id.clone() />
                        <input type="hidden" name="app_name" value=app_name.clone() />

                        <div>
                            <h3 class="panel-title">"Feedback"</h3>
                            <p class="panel-copy">
                                "This form is tagged for: " <strong>{app_name.clone()}</strong>
                            </p>
                        </div>

                        <div class="form-row">
                            <input
                                name="name"
                                required=true
                                type="text"
                                placeholder="Name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <input
                                name="email"
                                type="email"
                                placeholder="Email (optional)"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>

                        <select
                            name="topic"
                            on:change=move |ev| {
                                if let Ok(t) = event_target_value(&ev).parse::<Topic>() {
                                    set_topic.set(t);
                                }
                            }
                        >
                            {Topic::ALL.into_iter().map(|t| {
                                view! {
                                    <option value=t.label() selected=move || topic.get() == t>
                                        {t.label()}
                                    </option>
                                }
                            }).collect::<Vec<_>>()}
                        </select>

                        <textarea
                            name="message"
                            required=true
                            rows="4"
                            placeholder="What would you like to share?"
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>

                        {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || state.get().is_busy()
                        >
                            {move || if state.get().is_busy() { "Sending..." } else { "Send Feedback" }}
                        </button>
                    </form>
                }
                .into_any()
            }
        }}
    }
}
