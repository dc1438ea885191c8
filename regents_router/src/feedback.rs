//! Feedback form model.
//!
//! The form posts `application/x-www-form-urlencoded` to a form-handling
//! backend on the same origin. The backend's response is never inspected:
//! success and network failure both end in [`SubmitState::Submitted`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Subject;
use crate::error::FeedbackError;

/// Form schema name the backend keys submissions on.
pub const DEFAULT_FORM_NAME: &str = "support-form";
/// The backend accepts posts at the site root.
pub const DEFAULT_ENDPOINT: &str = "/";
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Where and under what name submissions are posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackForm {
    pub endpoint: String,
    pub form_name: String,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            form_name: DEFAULT_FORM_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Topic {
    #[default]
    FeatureRequest,
    BugReport,
    Question,
    Other,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::FeatureRequest,
        Topic::BugReport,
        Topic::Question,
        Topic::Other,
    ];

    /// Label shown in the select box and sent as the field value.
    pub fn label(self) -> &'static str {
        match self {
            Topic::FeatureRequest => "Feature Request",
            Topic::BugReport => "Bug Report",
            Topic::Question => "Question",
            Topic::Other => "Other",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.label() == s.trim())
            .ok_or_else(|| FeedbackError::UnknownTopic(s.to_string()))
    }
}

/// A validated submission, tagged with the subject it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    pub form_name: String,
    pub app_id: String,
    pub app_name: String,
    pub name: String,
    pub email: Option<String>,
    pub topic: Topic,
    pub message: String,
}

impl FeedbackSubmission {
    pub fn new(
        form: &FeedbackForm,
        subject: &Subject,
        name: &str,
        email: &str,
        topic: Topic,
        message: &str,
    ) -> Result<Self, FeedbackError> {
        let name = required("name", name)?;
        let message = required("message", message)?;
        let email = Some(email.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        Ok(Self {
            form_name: form.form_name.clone(),
            app_id: subject.id.clone(),
            app_name: subject.name.clone(),
            name,
            email,
            topic,
            message,
        })
    }

    /// Form fields in document order. An absent email is sent empty, the
    /// same as an untouched optional input.
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("form-name", self.form_name.as_str()),
            ("app_id", self.app_id.as_str()),
            ("app_name", self.app_name.as_str()),
            ("name", self.name.as_str()),
            ("email", self.email.as_deref().unwrap_or("")),
            ("topic", self.topic.label()),
            ("message", self.message.as_str()),
        ]
    }

    /// `application/x-www-form-urlencoded` request body, serialized the way
    /// a browser form does it (spaces become `+`).
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FeedbackError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FeedbackError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

/// Lifecycle of one form on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmitState {
    /// Start a submission. Returns false if one is already in flight or done,
    /// so double clicks do not post twice.
    pub fn begin(&mut self) -> bool {
        if *self != SubmitState::Idle {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// Settle a submission. The outcome is deliberately ignored.
    pub fn finish<E>(&mut self, outcome: Result<(), E>) {
        if outcome.is_err() {
            tracing::debug!("feedback post failed; reporting success anyway");
        }
        *self = SubmitState::Submitted;
    }

    pub fn is_busy(self) -> bool {
        self == SubmitState::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn earth_space() -> Subject {
        Catalog::default().find("earth-space").cloned().unwrap()
    }

    #[test]
    fn topic_labels_parse_back() {
        for topic in Topic::ALL {
            assert_eq!(topic.label().parse::<Topic>().unwrap(), topic);
        }
        assert!("Complaint".parse::<Topic>().is_err());
        assert_eq!(Topic::default(), Topic::FeatureRequest);
    }

    #[test]
    fn submission_requires_name_and_message() {
        let form = FeedbackForm::default();
        let subject = earth_space();
        let err = FeedbackSubmission::new(&form, &subject, "  ", "", Topic::Question, "hi");
        assert_eq!(err, Err(FeedbackError::MissingField("name")));
        let err = FeedbackSubmission::new(&form, &subject, "Ana", "", Topic::Question, "\n");
        assert_eq!(err, Err(FeedbackError::MissingField("message")));
    }

    #[test]
    fn submission_is_tagged_with_subject() {
        let sub = FeedbackSubmission::new(
            &FeedbackForm::default(),
            &earth_space(),
            " Ana ",
            "   ",
            Topic::BugReport,
            "Crash on launch",
        )
        .unwrap();
        assert_eq!(sub.app_id, "earth-space");
        assert_eq!(sub.app_name, "Earth & Space Science");
        assert_eq!(sub.name, "Ana");
        assert_eq!(sub.email, None);
    }

    #[test]
    fn encodes_url_form_body() {
        let sub = FeedbackSubmission::new(
            &FeedbackForm::default(),
            &earth_space(),
            "Ana",
            "ana@example.com",
            Topic::FeatureRequest,
            "More maps & charts",
        )
        .unwrap();
        assert_eq!(
            sub.encode(),
            "form-name=support-form&app_id=earth-space&app_name=Earth+%26+Space+Science\
             &name=Ana&email=ana%40example.com&topic=Feature+Request\
             &message=More+maps+%26+charts"
        );
    }

    #[test]
    fn body_follows_browser_form_serialization() {
        let sub = FeedbackSubmission::new(
            &FeedbackForm::default(),
            &earth_space(),
            "Ana María",
            "",
            Topic::Question,
            "a+b = c? 100%*~",
        )
        .unwrap();
        let body = sub.encode();
        assert!(body.contains("&name=Ana+Mar%C3%ADa&"));
        assert!(body.contains("&message=a%2Bb+%3D+c%3F+100%25*%7E"));
        assert!(!body.contains("%20"));
    }

    #[test]
    fn absent_email_is_sent_empty() {
        let sub = FeedbackSubmission::new(
            &FeedbackForm::default(),
            &earth_space(),
            "Ana",
            "",
            Topic::Other,
            "hello",
        )
        .unwrap();
        assert!(sub.encode().contains("&email=&"));
    }

    #[test]
    fn submit_state_always_ends_submitted() {
        let mut ok = SubmitState::default();
        assert!(ok.begin());
        assert!(ok.is_busy());
        assert!(!ok.begin());
        ok.finish::<()>(Ok(()));
        assert_eq!(ok, SubmitState::Submitted);

        let mut failed = SubmitState::default();
        failed.begin();
        failed.finish(Err("network down"));
        assert_eq!(failed, SubmitState::Submitted);
        assert!(!failed.begin());
    }
}
