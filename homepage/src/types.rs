//! Homepage data types.
//!
//! Every entity on the page is build-time constant data. The types borrow
//! `'static` strings so the whole configuration lives in `const` slices
//! (see [`crate::content`]) and can still be serialized into the page
//! manifest via serde.
//!
//! # Example
//!
//! ```rust
//! use trustcard_homepage::types::{Tile, TileSpan};
//!
//! let tile = Tile {
//!     title: "Overview",
//!     description: "Start here.",
//!     destination: "/docs/tutorial/overview",
//!     tag: Some("Start"),
//!     icon: None,
//!     span: Some(TileSpan::Wide),
//! };
//! assert_eq!(tile.span_class(), "span-wide");
//! assert_eq!(tile.icon_or_default(), "✨");
//! ```

use serde::Serialize;

/// Icon shown on a tile that does not carry its own.
pub const DEFAULT_TILE_ICON: &str = "✨";

/// Layout span hint for a tile in the bento grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileSpan {
    /// Two columns wide
    Wide,
    /// Two rows tall
    Tall,
    /// Single cell
    #[default]
    Normal,
}

impl TileSpan {
    /// CSS sizing class for this span.
    pub fn class(self) -> &'static str {
        match self {
            TileSpan::Wide => "span-wide",
            TileSpan::Tall => "span-tall",
            TileSpan::Normal => "span-normal",
        }
    }
}

/// A navigational card on the homepage grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Card heading
    pub title: &'static str,
    /// One sentence under the heading
    pub description: &'static str,
    /// Internal route or absolute URL the card links to
    pub destination: &'static str,
    /// Small label in the card header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
    /// Glyph in the card header, [`DEFAULT_TILE_ICON`] when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Layout hint, [`TileSpan::Normal`] when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<TileSpan>,
}

impl Tile {
    /// Effective span after applying the default.
    pub fn effective_span(&self) -> TileSpan {
        self.span.unwrap_or_default()
    }

    /// CSS sizing class for the card.
    pub fn span_class(&self) -> &'static str {
        self.effective_span().class()
    }

    /// Glyph for the card header after applying the default.
    pub fn icon_or_default(&self) -> &'static str {
        self.icon.unwrap_or(DEFAULT_TILE_ICON)
    }
}

/// One stage of the "How it works" flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position in the flow
    pub number: u8,
    /// Glyph next to the number
    pub icon: &'static str,
    /// Card heading
    pub title: &'static str,
    /// One sentence under the heading
    pub description: &'static str,
}

/// A release batch label together with its display state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WaveState {
    /// Display label, e.g. `Wave 1`
    pub label: &'static str,
    /// Whether this is the highlighted wave
    pub active: bool,
}

/// A call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cta {
    /// Button text
    pub label: &'static str,
    /// Route or absolute URL
    pub to: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: Tile = Tile {
        title: "Bare",
        description: "No optional fields",
        destination: "/docs/bare",
        tag: None,
        icon: None,
        span: None,
    };

    #[test]
    fn span_classes_are_distinct() {
        assert_eq!(TileSpan::Wide.class(), "span-wide");
        assert_eq!(TileSpan::Tall.class(), "span-tall");
        assert_eq!(TileSpan::Normal.class(), "span-normal");
    }

    #[test]
    fn missing_span_falls_back_to_normal() {
        assert_eq!(BARE.effective_span(), TileSpan::Normal);
        assert_eq!(BARE.span_class(), "span-normal");
    }

    #[test]
    fn missing_icon_falls_back_to_sparkles() {
        assert_eq!(BARE.icon_or_default(), DEFAULT_TILE_ICON);
        let with_icon = Tile {
            icon: Some("🌊"),
            ..BARE
        };
        assert_eq!(with_icon.icon_or_default(), "🌊");
    }

    #[test]
    fn tile_serializes_without_absent_fields() {
        let json = serde_json::to_value(BARE).unwrap();
        assert_eq!(json["title"], "Bare");
        assert!(json.get("tag").is_none());
        assert!(json.get("span").is_none());

        let tall = Tile {
            span: Some(TileSpan::Tall),
            ..BARE
        };
        let json = serde_json::to_value(tall).unwrap();
        assert_eq!(json["span"], "tall");
    }
}
