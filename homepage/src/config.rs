//! Site configuration.
//!
//! Loads `site.toml`, the homepage's view of the documentation site's
//! global settings. Components read it through Leptos context, see
//! [`crate::components::use_site_config`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SiteError};

/// Global site settings injected into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the header and the `<title>` suffix
    pub title: String,
    /// Short tagline for the site
    pub tagline: String,
    /// Public origin of the site, e.g. `https://docs.trustcard.box`
    pub url: String,
    /// Path prefix for internal links, always starts and ends with `/`
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Trust Card".to_string(),
            tagline: "Trust. Collect. Connect.".to_string(),
            url: "https://docs.trustcard.box".to_string(),
            base_url: "/".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a TOML file.
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "site config not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.base_url = normalize_base_url(&config.base_url);
        Ok(config)
    }

    /// Resolve a link target against `base_url`.
    ///
    /// Absolute URLs pass through untouched. `base_url` is normalised here
    /// too, so directly constructed configs resolve the same as loaded ones.
    pub fn resolve(&self, to: &str) -> String {
        if crate::content::is_external(to) {
            return to.to_string();
        }
        format!(
            "{}{}",
            normalize_base_url(&self.base_url),
            to.trim_start_matches('/')
        )
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}
