// Building blocks shared by the pages

mod feedback_form;
mod features;
mod footer;
mod header;
mod subject_card;

pub use feedback_form::FeedbackForm;
pub use features::{ComingSoon, FeatureGrid};
pub use footer::Footer;
pub use header::PageHeader;
pub use subject_card::SubjectCard;
