//! Static-hosting artifacts for a deployed site.
//!
//! The site is a single page served from `index.html`; deep links such as
//! `/apps/biology` only reach the router if the host rewrites them. The form
//! backend also needs to see the feedback form's fields in static HTML at
//! deploy time, since the real form only exists after the app renders.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{DeployError, RouteError};
use crate::feedback::FeedbackForm;
use crate::route::Router;

pub const REDIRECTS_FILE: &str = "_redirects";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const FORMS_FILE: &str = "forms.html";

/// Every canonical browser path for the catalog, base path applied.
pub fn canonical_paths(router: &Router, catalog: &Catalog) -> Result<Vec<String>, RouteError> {
    catalog
        .routes(router.route_set().allows_feedback())
        .iter()
        .map(|route| router.href(route))
        .collect()
}

/// Rewrite rules sending every path under the base to the app shell.
pub fn redirects(router: &Router) -> String {
    let base = router.base();
    if base.is_root() {
        "/*    /index.html    200\n".to_string()
    } else {
        let prefix = base.as_str();
        format!("{prefix}/*    {prefix}/index.html    200\n")
    }
}

/// `sitemap.xml` listing every canonical page under `origin`.
pub fn sitemap_xml(router: &Router, catalog: &Catalog, origin: &str) -> Result<String, RouteError> {
    let origin = origin.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in canonical_paths(router, catalog)? {
        xml.push_str(&format!(
            "  <url><loc>{}</loc></url>\n",
            escape_html(&format!("{origin}{path}"))
        ));
    }
    xml.push_str("</urlset>\n");
    Ok(xml)
}

/// Hidden copy of the feedback form for build-time form detection.
pub fn form_skeleton(form: &FeedbackForm) -> String {
    let name = escape_html(&form.form_name);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <body>\n\
         <form name=\"{name}\" method=\"POST\" data-netlify=\"true\" hidden>\n\
         \x20 <input type=\"hidden\" name=\"form-name\" value=\"{name}\" />\n\
         \x20 <input type=\"hidden\" name=\"app_id\" />\n\
         \x20 <input type=\"hidden\" name=\"app_name\" />\n\
         \x20 <input type=\"text\" name=\"name\" />\n\
         \x20 <input type=\"email\" name=\"email\" />\n\
         \x20 <select name=\"topic\"></select>\n\
         \x20 <textarea name=\"message\"></textarea>\n\
         </form>\n\
         </body>\n\
         </html>\n"
    )
}

/// Write `_redirects`, `forms.html` and, given an origin, `sitemap.xml`
/// into `out_dir`. Returns the written paths.
pub fn write_bundle(
    router: &Router,
    catalog: &Catalog,
    form: &FeedbackForm,
    origin: Option<&str>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, DeployError> {
    fs::create_dir_all(out_dir).map_err(|source| DeployError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut files = vec![
        (REDIRECTS_FILE, redirects(router)),
        (FORMS_FILE, form_skeleton(form)),
    ];
    if let Some(origin) = origin {
        files.push((SITEMAP_FILE, sitemap_xml(router, catalog, origin)?));
    }

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = out_dir.join(name);
        fs::write(&path, content).map_err(|source| DeployError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::BasePath;
    use crate::route::RouteSet;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn site_router() -> Router {
        Router::new(BasePath::new("/regents/"), RouteSet::Full)
    }

    #[test]
    fn canonical_paths_apply_base() {
        let paths = canonical_paths(&site_router(), &Catalog::default()).unwrap();
        assert_eq!(paths[0], "/regents");
        assert_eq!(paths[1], "/regents/apps/earth-space");
        assert_eq!(paths[2], "/regents/apps/earth-space/feedback");
        assert_eq!(paths.len(), 11);
    }

    #[test]
    fn reduced_route_set_skips_feedback_paths() {
        let router = Router::new(BasePath::root(), RouteSet::SubjectsOnly);
        let paths = canonical_paths(&router, &Catalog::default()).unwrap();
        assert_eq!(paths.len(), 6);
        assert!(paths.iter().all(|p| !p.ends_with("/feedback")));
    }

    #[test]
    fn redirects_cover_the_base() {
        assert_eq!(redirects(&Router::default()), "/*    /index.html    200\n");
        assert_eq!(
            redirects(&site_router()),
            "/regents/*    /regents/index.html    200\n"
        );
    }

    #[test]
    fn sitemap_lists_absolute_urls() {
        let xml = sitemap_xml(&site_router(), &Catalog::default(), "https://regents.example/")
            .unwrap();
        assert!(xml.contains("<loc>https://regents.example/regents</loc>"));
        assert!(xml.contains("<loc>https://regents.example/regents/apps/algebra-1/feedback</loc>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn form_skeleton_names_every_field() {
        let html = form_skeleton(&FeedbackForm::default());
        assert!(html.contains("<form name=\"support-form\""));
        for field in ["form-name", "app_id", "app_name", "name", "email", "topic", "message"] {
            assert!(html.contains(&format!("name=\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn escape_html_handles_markup() {
        assert_eq!(escape_html("a&b<\"c\">"), "a&amp;b&lt;&quot;c&quot;&gt;");
    }

    #[test]
    fn write_bundle_writes_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");
        let written = write_bundle(
            &site_router(),
            &Catalog::default(),
            &FeedbackForm::default(),
            Some("https://regents.example"),
            &out,
        )
        .unwrap();

        assert_eq!(written.len(), 3);
        assert!(out.join(REDIRECTS_FILE).is_file());
        assert!(out.join(FORMS_FILE).is_file());
        assert!(out.join(SITEMAP_FILE).is_file());

        let without_origin = write_bundle(
            &site_router(),
            &Catalog::default(),
            &FeedbackForm::default(),
            None,
            &dir.path().join("plain"),
        )
        .unwrap();
        assert_eq!(without_origin.len(), 2);
    }
}
