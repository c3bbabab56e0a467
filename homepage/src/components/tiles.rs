//! Bento grid of navigation tiles

use leptos::prelude::*;

use super::{Heading, Link, class_names};
use crate::content::TILES;
use crate::types::Tile;

/// Grid holding one [`BentoCard`] per configured tile, in order.
#[component]
pub fn TileGrid(
    /// Tiles to show, the configured grid by default
    #[prop(default = TILES)]
    tiles: &'static [Tile],
) -> impl IntoView {
    view! {
        <div class="container">
            <div class="bento-grid">
                {tiles.iter().map(|&tile| view! { <BentoCard tile=tile /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// A single tile as a clickable card.
#[component]
pub fn BentoCard(
    /// Tile to render
    tile: Tile,
) -> impl IntoView {
    let class = class_names(&[Some("doc-card"), Some(tile.span_class())]);

    view! {
        <Link to=tile.destination class=class>
            <div class="card-glow"></div>
            <div class="card-header">
                <span class="card-emoji">{tile.icon_or_default()}</span>
                {tile.tag.map(|tag| view! { <span class="card-tag">{tag}</span> })}
            </div>
            <div>
                <Heading level=3 class="card-title">{tile.title}</Heading>
                <p class="card-desc">{tile.description}</p>
            </div>
            <div aria-hidden="true" class="card-arrow">"↗"</div>
        </Link>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileSpan;
    use leptos::tachys::view::RenderHtml;

    /// Every `<a>` element carrying the card class, tag plus inner HTML.
    fn cards(html: &str) -> Vec<&str> {
        html.split("<a ")
            .skip(1)
            .map(|chunk| chunk.split("</a>").next().unwrap_or(chunk))
            .filter(|chunk| chunk.contains("doc-card"))
            .collect()
    }

    #[test]
    fn one_card_per_tile() {
        let html = view! { <TileGrid /> }.to_html();
        let cards = cards(&html);
        assert_eq!(cards.len(), TILES.len());
        assert_eq!(cards.len(), 5);

        for tile in TILES {
            let matching: Vec<_> = cards
                .iter()
                .filter(|card| card.contains(&format!("href=\"{}\"", tile.destination)))
                .collect();
            assert_eq!(matching.len(), 1, "destination {}", tile.destination);
            assert!(matching[0].contains(&format!(">{}</h3>", tile.title)));
        }
    }

    #[test]
    fn cards_keep_configured_order() {
        let html = view! { <TileGrid /> }.to_html();
        let positions: Vec<usize> = TILES
            .iter()
            .map(|tile| html.find(&format!(">{}</h3>", tile.title)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn missing_span_renders_normal_class() {
        let html = view! { <TileGrid /> }.to_html();
        let cards = cards(&html);
        let unhinted = TILES.iter().filter(|t| t.span.is_none()).count();
        assert_eq!(cards.iter().filter(|c| c.contains("span-normal")).count(), unhinted);
        assert_eq!(cards.iter().filter(|c| c.contains("span-wide")).count(), 1);
        assert_eq!(cards.iter().filter(|c| c.contains("span-tall")).count(), 0);
    }

    #[test]
    fn optional_fields_fall_back() {
        const TILES_WITHOUT_EXTRAS: &[Tile] = &[Tile {
            title: "Plain",
            description: "Nothing optional",
            destination: "/docs/plain",
            tag: None,
            icon: None,
            span: None,
        }];
        let html = view! { <TileGrid tiles=TILES_WITHOUT_EXTRAS /> }.to_html();
        assert!(html.contains("✨"));
        assert!(!html.contains("card-tag"));
        assert!(html.contains("span-normal"));
    }

    #[test]
    fn tall_span_selects_tall_class() {
        let tile = Tile {
            span: Some(TileSpan::Tall),
            ..TILES[1]
        };
        let html = view! { <BentoCard tile=tile /> }.to_html();
        assert!(html.contains("doc-card span-tall"));
        assert!(html.contains("card-tag"));
    }
}
