//! End-to-End CLI Tests for regents-site

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn regents_site() -> Command {
    cargo_bin_cmd!("regents-site")
}

/// Run from an empty directory so no stray regents.toml is picked up.
fn in_empty_dir() -> (TempDir, Command) {
    let dir = TempDir::new().unwrap();
    let mut cmd = regents_site();
    cmd.current_dir(dir.path());
    (dir, cmd)
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        regents_site()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("routes"))
            .stdout(predicate::str::contains("build"));
    }

    #[test]
    fn shows_version() {
        regents_site()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.args(["--config", "nope.toml", "routes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load nope.toml"));
    }
}

// ============================================
// Routes & Parse
// ============================================

mod routing {
    use super::*;

    #[test]
    fn lists_default_routes() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("/\n/apps/earth-space\n"))
            .stdout(predicate::str::contains("/apps/algebra-1/feedback"));
    }

    #[test]
    fn config_base_path_applies() {
        let (dir, mut cmd) = in_empty_dir();
        std::fs::write(
            dir.path().join("regents.toml"),
            "base_path = \"/regents/\"\nroute_set = \"subjects_only\"\n",
        )
        .unwrap();
        cmd.arg("routes")
            .assert()
            .success()
            .stdout(predicate::str::contains("/regents/apps/biology"))
            .stdout(predicate::str::contains("feedback").not());
    }

    #[test]
    fn parse_prints_route_json() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.args(["parse", "/apps/a%20b/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"kind\": \"subject_page\""))
            .stdout(predicate::str::contains("\"subject_id\": \"a b\""));
    }

    #[test]
    fn parse_shows_correction() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.args(["parse", "/apps/chemistry"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"settled\": {\n    \"kind\": \"landing\""))
            .stdout(predicate::str::contains("\"history\": \"/\""));
    }

    #[test]
    fn debug_log_level_reports_corrections() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.env_remove("RUST_LOG")
            .args(["--log-level", "debug", "parse", "/nope"])
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "unrecognized location, replacing with landing",
            ));
    }

    #[test]
    fn default_log_level_is_quiet() {
        let (_dir, mut cmd) = in_empty_dir();
        cmd.env_remove("RUST_LOG")
            .args(["parse", "/nope"])
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

// ============================================
// Build
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_bundle() {
        let (dir, mut cmd) = in_empty_dir();
        cmd.args(["build", "--out", "dist", "--origin", "https://regents.example"])
            .assert()
            .success()
            .stdout(predicate::str::contains("_redirects"));

        let dist = dir.path().join("dist");
        let redirects = std::fs::read_to_string(dist.join("_redirects")).unwrap();
        assert!(redirects.contains("/index.html"));
        let sitemap = std::fs::read_to_string(dist.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://regents.example/apps/earth-space"));
        assert!(dist.join("forms.html").is_file());
    }
}
