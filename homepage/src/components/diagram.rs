//! Embedded flow diagram

use leptos::prelude::*;

use super::Heading;
use crate::content::{DIAGRAM_EMBED_URL, DIAGRAM_HEIGHT};

/// Flow diagram hosted externally, embedded full width.
#[component]
pub fn DiagramEmbed() -> impl IntoView {
    view! {
        <div class="container">
            <Heading level=2 class="sub-title">"👁️"</Heading>
            <div class="embed-box">
                <div class="embed-placeholder">
                    <iframe
                        src=DIAGRAM_EMBED_URL
                        title="Trust Card diagram"
                        width="100%"
                        height=DIAGRAM_HEIGHT
                        class="embed-frame"
                    ></iframe>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn iframe_tag(html: &str) -> &str {
        let start = html.find("<iframe").unwrap();
        let end = html[start..].find('>').unwrap();
        &html[start..start + end]
    }

    #[test]
    fn iframe_points_at_diagram() {
        let html = view! { <DiagramEmbed /> }.to_html();
        assert_eq!(html.matches("<iframe").count(), 1);
        let tag = iframe_tag(&html);
        assert!(tag.contains(&format!("src=\"{DIAGRAM_EMBED_URL}\"")));
        assert!(tag.contains("width=\"100%\""));
        assert!(tag.contains("height=\"600\""));
        assert!(tag.contains("embed-frame"));
    }

    #[test]
    fn diagram_sits_inside_embed_box() {
        let html = view! { <DiagramEmbed /> }.to_html();
        let boxed = html.find("embed-box").unwrap();
        assert!(boxed < html.find("<iframe").unwrap());
        assert!(html.contains("sub-title"));
    }
}
