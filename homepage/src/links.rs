//! Broken-link check for the homepage.
//!
//! Every internal `/docs/...` target on the page must map to a document in
//! the docs directory, using the usual doc route layout:
//!
//! ```text
//! /docs/tutorial/waves  ->  <docs>/tutorial/waves.md
//!                           <docs>/tutorial/waves.mdx
//!                           <docs>/tutorial/waves/index.md
//!                           <docs>/tutorial/waves/index.mdx
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::content::page_links;
use crate::error::{Result, SiteError};

const DOCS_PREFIX: &str = "/docs/";

/// Candidate files backing a `/docs/...` route, or `None` for other targets.
pub fn doc_candidates(docs_dir: &Path, route: &str) -> Option<Vec<PathBuf>> {
    let rest = route.strip_prefix(DOCS_PREFIX)?.trim_end_matches('/');
    if rest.is_empty() {
        return None;
    }
    let base = docs_dir.join(rest);
    Some(vec![
        docs_dir.join(format!("{rest}.md")),
        docs_dir.join(format!("{rest}.mdx")),
        base.join("index.md"),
        base.join("index.mdx"),
    ])
}

/// Check the given link targets against `docs_dir`.
///
/// Returns every unresolved target at once.
pub fn check_links(docs_dir: &Path, links: &[&str]) -> Result<()> {
    let mut broken = Vec::new();
    for link in links {
        let Some(candidates) = doc_candidates(docs_dir, link) else {
            continue;
        };
        match candidates.iter().find(|p| p.is_file()) {
            Some(found) => debug!(link, file = %found.display(), "link resolved"),
            None => {
                warn!(link, "no document for homepage link");
                broken.push((*link).to_string());
            }
        }
    }

    if broken.is_empty() {
        Ok(())
    } else {
        Err(SiteError::BrokenLinks(broken))
    }
}

/// Check every internal link on the homepage.
pub fn check_page_links(docs_dir: &Path) -> Result<()> {
    check_links(docs_dir, &page_links())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "# doc\n").unwrap();
    }

    #[test]
    fn non_doc_targets_are_skipped() {
        let tmp = TempDir::new().unwrap();
        assert!(doc_candidates(tmp.path(), "https://trustcard.box/").is_none());
        assert!(doc_candidates(tmp.path(), "/img/card-placeholder.png").is_none());
        assert!(doc_candidates(tmp.path(), "/docs/").is_none());
        assert!(check_links(tmp.path(), &["https://trustcard.box/"]).is_ok());
    }

    #[test]
    fn resolves_all_layouts() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.md");
        touch(tmp.path(), "b.mdx");
        touch(tmp.path(), "c/index.md");
        touch(tmp.path(), "d/index.mdx");

        check_links(tmp.path(), &["/docs/a", "/docs/b", "/docs/c", "/docs/d/"]).unwrap();
    }

    #[test]
    fn dotted_segments_keep_their_suffix() {
        let tmp = TempDir::new().unwrap();
        let candidates = doc_candidates(tmp.path(), "/docs/release/v1.2").unwrap();
        assert_eq!(candidates[0], tmp.path().join("release/v1.2.md"));
        assert_eq!(candidates[1], tmp.path().join("release/v1.2.mdx"));

        touch(tmp.path(), "release/v1.md");
        assert!(check_links(tmp.path(), &["/docs/release/v1.2"]).is_err());
        touch(tmp.path(), "release/v1.2.md");
        check_links(tmp.path(), &["/docs/release/v1.2"]).unwrap();
    }

    #[test]
    fn reports_every_missing_link() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "tutorial/overview.md");

        let err = check_links(
            tmp.path(),
            &["/docs/tutorial/overview", "/docs/tutorial/waves", "/docs/tutorial/domain"],
        )
        .unwrap_err();
        match err {
            SiteError::BrokenLinks(links) => {
                assert_eq!(links, vec!["/docs/tutorial/waves", "/docs/tutorial/domain"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn full_tutorial_tree_passes_page_check() {
        let tmp = TempDir::new().unwrap();
        for doc in [
            "overview",
            "waves",
            "invitations",
            "physical-card",
            "domain",
            "relic-holder",
            "trust-graph",
            "reputation-checker",
        ] {
            touch(tmp.path(), &format!("tutorial/{doc}.md"));
        }
        check_page_links(tmp.path()).unwrap();
    }
}
