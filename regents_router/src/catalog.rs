//! Subject catalog: the fixed, ordered list of apps the site advertises.
//!
//! Built once at startup and only ever read afterwards. The router never
//! consults it; the view layer uses [`Catalog::resolve`] to turn a route into
//! something it can render.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::route::Route;

/// One marketing bullet on a live subject page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub copy: String,
}

/// Per-subject color identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub ink: String,
    pub shell: String,
    pub accent: String,
    pub accent_soft: String,
    pub muted: String,
    pub panel: String,
}

impl Theme {
    fn new(ink: &str, shell: &str, accent: &str, accent_soft: &str, muted: &str) -> Self {
        Self {
            ink: ink.into(),
            shell: shell.into(),
            accent: accent.into(),
            accent_soft: accent_soft.into(),
            muted: muted.into(),
            panel: "#FFFFFF".into(),
        }
    }

    /// Inline CSS custom properties, e.g. for a page wrapper's `style`.
    pub fn css_vars(&self) -> String {
        format!(
            "--ink:{};--shell:{};--accent:{};--accent-soft:{};--muted:{};--panel:{}",
            self.ink, self.shell, self.accent, self.accent_soft, self.muted, self.panel
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#10251E", "#F3F7F3", "#66C8A3", "#D5F2E8", "#4C6960")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub app_store_url: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub theme: Theme,
}

impl Subject {
    fn upcoming(id: &str, name: &str, description: &str, theme: Theme) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: "Coming soon".into(),
            description: description.into(),
            coming_soon: true,
            app_store_url: None,
            features: Vec::new(),
            theme,
        }
    }

    /// Live subjects with a store listing get a download button.
    pub fn download_url(&self) -> Option<&str> {
        if self.coming_soon {
            None
        } else {
            self.app_store_url.as_deref()
        }
    }
}

/// What the view layer should show for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Landing,
    Subject(&'a Subject),
    Feedback(&'a Subject),
    /// Unrecognized path, or a well-formed route naming an unknown subject.
    Missing,
}

/// What to do with a route whose subject id is not in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSubjectPolicy {
    /// Replace the entry with the landing page, same as an unmatched path.
    #[default]
    RedirectHome,
    /// Render nothing and leave the location alone.
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    /// Validate and wrap an ordered subject list.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (idx, subject) in subjects.iter().enumerate() {
            if subject.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(idx));
            }
            if !seen.insert(subject.id.as_str()) {
                return Err(CatalogError::DuplicateId(subject.id.clone()));
            }
        }
        Ok(Self { subjects })
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn find(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// The subject shown in the landing page's "current release" panel.
    pub fn featured(&self) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| !s.coming_soon)
            .or_else(|| self.subjects.first())
    }

    pub fn resolve(&self, route: &Route) -> Page<'_> {
        match route {
            Route::Landing => Page::Landing,
            Route::SubjectPage { subject_id } => {
                self.find(subject_id).map_or(Page::Missing, Page::Subject)
            }
            Route::SubjectFeedback { subject_id } => {
                self.find(subject_id).map_or(Page::Missing, Page::Feedback)
            }
            Route::NotFound => Page::Missing,
        }
    }

    pub fn accepts(&self, route: &Route) -> bool {
        !matches!(self.resolve(route), Page::Missing)
    }

    /// Every route with a page: landing, then each subject's page and, when
    /// `with_feedback`, its feedback page.
    pub fn routes(&self, with_feedback: bool) -> Vec<Route> {
        let mut routes = vec![Route::Landing];
        for subject in &self.subjects {
            routes.push(Route::subject(subject.id.as_str()));
            if with_feedback {
                routes.push(Route::feedback(subject.id.as_str()));
            }
        }
        routes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let earth_space = Subject {
            id: "earth-space".into(),
            name: "Earth & Space Science".into(),
            subtitle: "Available now".into(),
            description: "Practice with Regents-style questions, build vocabulary, and learn \
                          high-impact test strategies."
                .into(),
            coming_soon: false,
            app_store_url: Some(
                "https://apps.apple.com/us/app/earth-science-regents-study/id378695932".into(),
            ),
            features: vec![
                Feature {
                    title: "Past Regents Practice".into(),
                    copy: "Train with exam-style prompts and immediate feedback to build \
                           confidence before test day."
                        .into(),
                },
                Feature {
                    title: "Vocabulary Notecards".into(),
                    copy: "Memorize core Earth and Space Science terms with focused \
                           flashcard-style review."
                        .into(),
                },
                Feature {
                    title: "Study Strategies".into(),
                    copy: "Use targeted tips to make the most of your review time and \
                           reference tables."
                        .into(),
                },
            ],
            theme: Theme::default(),
        };

        Self {
            subjects: vec![
                earth_space,
                Subject::upcoming(
                    "biology",
                    "Biology",
                    "A future Regents prep app focused on life science concepts, labs, and \
                     exam strategy.",
                    Theme::new("#16261B", "#F4F8F2", "#7AC65A", "#E1F4D6", "#506A4B"),
                ),
                Subject::upcoming(
                    "global-history",
                    "Global History",
                    "A future Regents prep app focused on themes, documents, and long-essay \
                     preparation.",
                    Theme::new("#271D18", "#FAF5EF", "#D4975B", "#F3E2CE", "#7A5A45"),
                ),
                Subject::upcoming(
                    "us-history",
                    "United States History",
                    "A future Regents prep app focused on key eras, civic understanding, and \
                     evidence-based writing.",
                    Theme::new("#132238", "#F3F6FA", "#5D8ECB", "#D8E7F8", "#4B6286"),
                ),
                Subject::upcoming(
                    "algebra-1",
                    "Algebra I",
                    "A future Regents prep app focused on core algebra skills, fluency, and \
                     exam pacing.",
                    Theme::new("#25193A", "#F7F4FC", "#9B77D7", "#E7DDF8", "#665284"),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_ordered_and_valid() {
        let catalog = Catalog::default();
        let ids: Vec<_> = catalog.subjects().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["earth-space", "biology", "global-history", "us-history", "algebra-1"]
        );
        assert!(Catalog::new(catalog.subjects().to_vec()).is_ok());
    }

    #[test]
    fn only_live_subjects_expose_downloads() {
        let catalog = Catalog::default();
        assert!(catalog.find("earth-space").unwrap().download_url().is_some());
        assert!(catalog.find("biology").unwrap().download_url().is_none());
        assert_eq!(catalog.featured().unwrap().id, "earth-space");
    }

    #[test]
    fn resolve_maps_routes_to_pages() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve(&Route::Landing), Page::Landing);
        assert!(matches!(
            catalog.resolve(&Route::subject("biology")),
            Page::Subject(s) if s.name == "Biology"
        ));
        assert!(matches!(
            catalog.resolve(&Route::feedback("algebra-1")),
            Page::Feedback(s) if s.id == "algebra-1"
        ));
        assert_eq!(catalog.resolve(&Route::subject("chemistry")), Page::Missing);
        assert_eq!(catalog.resolve(&Route::NotFound), Page::Missing);
        assert!(!catalog.accepts(&Route::feedback("chemistry")));
    }

    #[test]
    fn rejects_empty_and_duplicate_ids() {
        let mut subjects = Catalog::default().subjects().to_vec();
        subjects[2].id = " ".into();
        assert_eq!(Catalog::new(subjects), Err(CatalogError::EmptyId(2)));

        let mut subjects = Catalog::default().subjects().to_vec();
        subjects[3].id = "biology".into();
        assert_eq!(
            Catalog::new(subjects),
            Err(CatalogError::DuplicateId("biology".into()))
        );
    }

    #[test]
    fn routes_enumerate_every_page() {
        let catalog = Catalog::default();
        assert_eq!(catalog.routes(false).len(), 6);
        assert_eq!(catalog.routes(true).len(), 11);
        assert_eq!(catalog.routes(true)[2], Route::feedback("earth-space"));
    }

    #[test]
    fn theme_renders_css_vars() {
        let vars = Theme::default().css_vars();
        assert!(vars.starts_with("--ink:#10251E;"));
        assert!(vars.ends_with("--panel:#FFFFFF"));
    }
}
