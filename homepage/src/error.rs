//! Error types for building the homepage

use std::path::PathBuf;

use thiserror::Error;

/// Build-time failures. Rendering itself cannot fail.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Filesystem error while reading config or writing output
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Site configuration could not be parsed
    #[error("Invalid site config {path}: {source}")]
    Config {
        /// Config file
        path: PathBuf,
        /// TOML parser error
        #[source]
        source: toml::de::Error,
    },

    /// Internal links with no matching document
    #[error("Broken links on homepage: {}", .0.join(", "))]
    BrokenLinks(Vec<String>),
}

/// Result type alias for homepage build operations
pub type Result<T> = std::result::Result<T, SiteError>;
