//! # trustcard-site
//!
//! Builds the static Trust Card documentation homepage.
//!
//! ## Usage
//!
//! ```bash
//! # Render build/index.html, failing on broken doc links
//! trustcard-site build --config site.toml --out build --docs docs
//!
//! # Inspect what the homepage shows
//! trustcard-site manifest --pretty
//!
//! # Only verify homepage links against the docs tree
//! trustcard-site check-links --docs docs
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use trustcard_homepage::config::SiteConfig;
use trustcard_homepage::{Manifest, links, write_homepage};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "trustcard-site")]
#[command(about = "Build the Trust Card documentation homepage")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the homepage to <out>/index.html
    Build {
        /// Site configuration file (defaults are used when missing)
        #[arg(long, default_value = "site.toml")]
        config: PathBuf,
        /// Output directory
        #[arg(long, default_value = "build")]
        out: PathBuf,
        /// Docs directory to check homepage links against before writing
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// Print tiles, waves, steps and links as JSON
    Manifest {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Check that every homepage doc link has a document
    CheckLinks {
        /// Docs directory
        #[arg(long)]
        docs: PathBuf,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn build(config: &Path, out: &Path, docs: Option<&Path>) -> Result<PathBuf> {
    let site = SiteConfig::load_from_path(config)
        .with_context(|| format!("loading site config {}", config.display()))?;
    debug!(?site, "site config loaded");

    if let Some(docs) = docs {
        check_links(docs)?;
    }

    let path = write_homepage(&site, out).context("writing homepage")?;
    info!("Homepage built: {}", path.display());
    Ok(path)
}

fn manifest_json(pretty: bool) -> Result<String> {
    let manifest = Manifest::current();
    let json = if pretty {
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string(&manifest)?
    };
    Ok(json)
}

fn check_links(docs: &Path) -> Result<()> {
    links::check_page_links(docs)
        .with_context(|| format!("checking homepage links against {}", docs.display()))?;
    info!("All homepage links resolve under {}", docs.display());
    Ok(())
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for the manifest
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("trustcard-site v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Build { config, out, docs } => {
            build(&config, &out, docs.as_deref())?;
        }
        Command::Manifest { pretty } => {
            println!("{}", manifest_json(pretty)?);
        }
        Command::CheckLinks { docs } => check_links(&docs)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[trustcard-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOCS: [&str; 8] = [
        "overview",
        "waves",
        "invitations",
        "physical-card",
        "domain",
        "relic-holder",
        "trust-graph",
        "reputation-checker",
    ];

    fn docs_tree(skip: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let tutorial = tmp.path().join("tutorial");
        std::fs::create_dir_all(&tutorial).unwrap();
        for doc in DOCS.iter().filter(|d| !skip.contains(d)) {
            std::fs::write(tutorial.join(format!("{doc}.md")), "# doc\n").unwrap();
        }
        tmp
    }

    #[test]
    fn parses_build_defaults() {
        let args = Args::try_parse_from(["trustcard-site", "build"]).unwrap();
        match args.command {
            Command::Build { config, out, docs } => {
                assert_eq!(config, PathBuf::from("site.toml"));
                assert_eq!(out, PathBuf::from("build"));
                assert!(docs.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn check_links_requires_docs() {
        assert!(Args::try_parse_from(["trustcard-site", "check-links"]).is_err());
    }

    #[test]
    fn build_writes_index_without_config_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        let path = build(&tmp.path().join("site.toml"), &out, None).unwrap();
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn build_aborts_on_broken_links() {
        let docs = docs_tree(&["relic-holder"]);
        let out = docs.path().join("out");
        let err = build(&docs.path().join("site.toml"), &out, Some(docs.path())).unwrap_err();
        assert!(format!("{err:#}").contains("/docs/tutorial/relic-holder"));
        assert!(!out.join("index.html").exists());
    }

    #[test]
    fn build_passes_with_complete_docs() {
        let docs = docs_tree(&[]);
        let out = docs.path().join("out");
        build(&docs.path().join("site.toml"), &out, Some(docs.path())).unwrap();
        assert!(out.join("index.html").is_file());
    }

    #[test]
    fn manifest_lists_tiles_and_active_wave() {
        let json: serde_json::Value = serde_json::from_str(&manifest_json(false).unwrap()).unwrap();
        assert_eq!(json["active_wave"], "Wave 1");
        assert_eq!(json["tiles"].as_array().unwrap().len(), 5);
        assert_eq!(json["links"].as_array().unwrap().len(), 10);
    }
}
