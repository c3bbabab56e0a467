//! Homepage header - site title, explainer and the two main CTAs

use leptos::prelude::*;

use super::{Heading, Link, use_site_config};
use crate::content::{HEADER_PRIMARY, HEADER_SECONDARY};

/// Page header with the site title from context.
#[component]
pub fn HomepageHeader() -> impl IntoView {
    let site = use_site_config();

    view! {
        <header class="hero hero-banner">
            <div class="container">
                <Heading level=1 class="hero__title">{site.title}</Heading>
                <p class="hero__subtitle hero-explainer">
                    "Beyond being just an NFT, it's a mechanism for "
                    <strong>"access"</strong>
                    ", "
                    <strong>"experience"</strong>
                    ", and "
                    <strong>"reputation"</strong>
                    "."
                </p>
                <div class="buttons">
                    <Link to=HEADER_PRIMARY.to class="button button--lg btn-primary">
                        {HEADER_PRIMARY.label}
                    </Link>
                    <Link to=HEADER_SECONDARY.to class="button button--lg btn-secondary">
                        {HEADER_SECONDARY.label}
                    </Link>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn header_uses_injected_title() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(SiteConfig {
                title: "Injected Title".into(),
                ..SiteConfig::default()
            });
            view! { <HomepageHeader /> }.to_html()
        });
        assert!(html.contains(">Injected Title</h1>"));
    }

    #[test]
    fn header_has_both_ctas() {
        let html = view! { <HomepageHeader /> }.to_html();
        assert!(html.contains("href=\"/docs/tutorial/overview\""));
        assert!(html.contains("href=\"https://trustcard.box/\""));
        assert!(html.contains("btn-primary"));
        assert!(html.contains("btn-secondary"));
    }
}
