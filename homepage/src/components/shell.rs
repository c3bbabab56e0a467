//! Page shell primitives - layout, links, headings, class composition.
//!
//! These stand in for what a documentation framework normally provides, so
//! the homepage sections only depend on this small surface.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::is_external;
use crate::styles::HOMEPAGE_CSS;

/// Site configuration from Leptos context, defaults when none is provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Join the present class names with single spaces.
///
/// ```rust
/// use trustcard_homepage::components::class_names;
///
/// let active = true;
/// assert_eq!(class_names(&[Some("wave-item"), active.then_some("wave-item-active")]), "wave-item wave-item-active");
/// assert_eq!(class_names(&[Some("doc-card"), None]), "doc-card");
/// ```
pub fn class_names(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The complete HTML document around the page content.
#[component]
pub fn Layout(
    /// Page title, suffixed with the site title
    title: &'static str,
    /// `<meta name="description">` content
    description: &'static str,
    children: Children,
) -> impl IntoView {
    let site = use_site_config();
    let full_title = format!("{} | {}", title, site.title);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{full_title}</title>
                <meta name="description" content=description />
                <style>{HOMEPAGE_CSS}</style>
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Navigational link.
///
/// Internal targets are resolved against the site `base_url`; absolute
/// URLs open in a new tab.
#[component]
pub fn Link(
    /// Route (`/docs/...`) or absolute URL
    to: &'static str,
    /// CSS classes for the anchor
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let href = use_site_config().resolve(to);

    if is_external(to) {
        view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=class>
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! { <a href=href class=class>{children()}</a> }.into_any()
    }
}

/// Section heading at a fixed level (1-3).
#[component]
pub fn Heading(
    /// 1, 2 or 3; anything above 3 renders as `<h3>`
    level: u8,
    /// CSS classes for the heading
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    match level {
        1 => view! { <h1 class=class>{children()}</h1> }.into_any(),
        2 => view! { <h2 class=class>{children()}</h2> }.into_any(),
        _ => view! { <h3 class=class>{children()}</h3> }.into_any(),
    }
}
