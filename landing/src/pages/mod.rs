// One component per route

mod feedback;
mod home;
mod subject;

pub use feedback::FeedbackPage;
pub use home::LandingPage;
pub use subject::SubjectPage;
