//! regents-site: deployment helper for the Regents Prep sites.
//!
//! ```bash
//! regents-site routes                         # every canonical path
//! regents-site parse /regents/apps/biology    # what the router makes of a location
//! regents-site build --out dist --origin https://regents.example
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;

use regents_router::config::CONFIG_FILE;
use regents_router::{
    History, MemoryHistory, Navigator, Page, SiteConfig, UnknownSubjectPolicy, deploy,
};

#[derive(Parser, Debug)]
#[command(name = "regents-site")]
#[command(about = "Routing and deployment helper for the Regents Prep sites")]
#[command(version)]
struct Args {
    /// Site config file (defaults to ./regents.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every canonical path, base path applied
    Routes,
    /// Resolve a browser location and print the route as JSON
    Parse {
        /// Full location path, base path included
        location: String,
    },
    /// Write _redirects, forms.html and sitemap.xml
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        /// Public origin for sitemap URLs; no sitemap without it
        #[arg(long)]
        origin: Option<String>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[regents-site][error] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(args.config.as_ref())?;
    let router = config.router();
    let catalog = config.catalog().context("invalid subject catalog")?;
    debug!(base = %router.base(), subjects = catalog.subjects().len(), "site loaded");

    match args.command {
        Command::Routes => {
            for path in deploy::canonical_paths(&router, &catalog)? {
                println!("{path}");
            }
        }
        Command::Parse { location } => {
            // Run the location through a navigator so corrections show up
            // exactly as the browser would see them.
            let mut nav = Navigator::new(router.clone(), MemoryHistory::new(location.as_str()));
            let parsed = router.resolve(&location);
            if config.unknown_subject == UnknownSubjectPolicy::RedirectHome
                && !catalog.accepts(nav.current())
            {
                nav.reject();
            }
            let page = match catalog.resolve(nav.current()) {
                Page::Landing => json!({ "page": "landing" }),
                Page::Subject(s) => json!({ "page": "subject", "name": s.name }),
                Page::Feedback(s) => json!({ "page": "feedback", "name": s.name }),
                Page::Missing => json!({ "page": "missing" }),
            };
            let out = json!({
                "location": location,
                "route": parsed,
                "settled": nav.current(),
                "page": page,
                "history": nav.history().location(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Build { out, origin } => {
            let written = deploy::write_bundle(
                &router,
                &catalog,
                &config.feedback,
                origin.as_deref(),
                &out,
            )
            .with_context(|| format!("failed to write bundle to {}", out.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(SiteConfig::load_or_default(&PathBuf::from(CONFIG_FILE))),
    }
}
