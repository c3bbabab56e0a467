//! # trustcard-homepage
//!
//! Leptos SSR renderer for the Trust Card documentation homepage.
//!
//! The homepage is a pure function of constant page content
//! ([`content`]) and the site configuration ([`config::SiteConfig`]).
//! Rendering happens once, on the server, and produces a complete static
//! HTML document. No hydration, no client runtime.
//!
//! ## Quick Start
//!
//! ```rust
//! use trustcard_homepage::{render_homepage, config::SiteConfig};
//!
//! let html = render_homepage(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Tile, step and wave data structures
//! - [`content`] - The constant page content and link inventory
//! - [`components`] - Leptos UI components
//! - [`config`] - `site.toml` loading
//! - [`links`] - Broken-link check against the docs tree
//! - [`styles`] - CSS constants
//!
//! Site configuration reaches the components through Leptos context, the
//! same way a documentation framework injects its site settings.

#![recursion_limit = "256"]
#![warn(missing_docs)]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod links;
pub mod styles;
pub mod types;

use std::path::{Path, PathBuf};

use components::HomepageDocument;
use config::SiteConfig;
use error::{Result, SiteError};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::info;

pub use content::Manifest;

/// File name of the rendered homepage inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Render the complete homepage for the given site.
///
/// Returns a full HTML document including `<!DOCTYPE html>`. Identical
/// input always produces identical output.
pub fn render_homepage(site: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(site.clone());
        view! { <HomepageDocument /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the homepage and write it to `<out_dir>/index.html`.
///
/// Creates `out_dir` when missing. Returns the written path.
pub fn write_homepage(site: &SiteConfig, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|source| SiteError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let html = render_homepage(site);
    let path = out_dir.join(INDEX_FILE);
    std::fs::write(&path, &html).map_err(|source| SiteError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), bytes = html.len(), "homepage written");
    Ok(path)
}
