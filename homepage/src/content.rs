//! Static page content.
//!
//! Single source of truth for everything the homepage shows: tiles, waves,
//! steps and the call-to-action targets. Components read from here and the
//! link check walks [`page_links`].

use serde::Serialize;

use crate::types::{Cta, Step, Tile, TileSpan, WaveState};

/// Page title passed to the layout shell.
pub const PAGE_TITLE: &str = "Trust Card";
/// Meta description passed to the layout shell.
pub const PAGE_DESCRIPTION: &str = "Trust. Collect. Connect.";

/// Navigation tiles in grid order.
pub const TILES: &[Tile] = &[
    Tile {
        title: "Overview",
        description: "How collectibles, invitations, and trust links form a living reputation graph.",
        destination: "/docs/tutorial/overview",
        tag: Some("Start"),
        icon: Some("🌐"),
        span: Some(TileSpan::Wide),
    },
    Tile {
        title: "Waves",
        description: "Limited drops with evolving frames and rarity distributions across Waves.",
        destination: "/docs/tutorial/waves",
        tag: Some("Drops"),
        icon: Some("🌊"),
        span: None,
    },
    Tile {
        title: "Invitations",
        description: "Cardholders invite others. Curated onboarding grows the Trust Graph.",
        destination: "/docs/tutorial/invitations",
        tag: Some("Onboarding"),
        icon: Some("✉️"),
        span: None,
    },
    Tile {
        title: "Physical Edition",
        description: "Premium prints with NFC/QR to carry your identity IRL.",
        destination: "/docs/tutorial/physical-card",
        tag: Some("IRL"),
        icon: Some("📇"),
        span: None,
    },
    Tile {
        title: "Personal Domain",
        description: "Claim yourname.box — your shareable identity hub.",
        destination: "/docs/tutorial/domain",
        tag: Some("Identity"),
        icon: Some("🔗"),
        span: None,
    },
];

/// Wave labels in display order.
pub const WAVES: &[&str] = &["Wave 1", "Wave 2", "Wave 3", "Wave 0"];
/// The wave highlighted on the page. Must be one of [`WAVES`].
pub const ACTIVE_WAVE: &str = "Wave 1";

/// "How it works" flow, numbered from 1.
pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        icon: "✉️",
        title: "Invitations open access",
        description: "A limited set of invitations is issued and expands over time.",
    },
    Step {
        number: 2,
        icon: "🗝️",
        title: "Invitation → mint a Chest",
        description: "You receive a chest that holds your future card’s rarity.",
    },
    Step {
        number: 3,
        icon: "🪪",
        title: "Reveal the NFT card (+ Physical)",
        description: "Burn the chest to reveal the 3D NFT, with the possibility of also receiving a premium physical card.",
    },
    Step {
        number: 4,
        icon: "⭐",
        title: "Build trust → more invitations",
        description: "Your Trust Score unlocks additional invite capacity.",
    },
];

// Header
/// Header primary CTA.
pub const HEADER_PRIMARY: Cta = Cta {
    label: "How it works",
    to: "/docs/tutorial/overview",
};
/// Header secondary CTA, leaves the site.
pub const HEADER_SECONDARY: Cta = Cta {
    label: "Vote for the firsts holders",
    to: "https://trustcard.box/",
};

// Hero
/// Lead paragraph under the hero headline.
pub const HERO_LEAD: &str = "Not just a collectible — an invitation, a proof of trust, and a key to reputation. \
Each wave introduces scarcity, each mint strengthens belonging, and each invitation consolidates the Trust Graph, \
paving the way for a community that grows progressively and with trust";
/// Hero primary CTA.
pub const HERO_PRIMARY: Cta = Cta {
    label: "Start reading",
    to: "/docs/tutorial/overview",
};
/// Hero secondary CTA.
pub const HERO_SECONDARY: Cta = Cta {
    label: "See Waves",
    to: "/docs/tutorial/waves",
};
/// Inline link under the wave list.
pub const TRUST_GRAPH: Cta = Cta {
    label: "Trust Graph ↗",
    to: "/docs/tutorial/trust-graph",
};
/// Inline link under the wave list.
pub const REPUTATION_CHECKER: Cta = Cta {
    label: "Reputation Checker ↗",
    to: "/docs/tutorial/reputation-checker",
};
/// External card simulator, linked from the preview.
pub const SIMULATOR: Cta = Cta {
    label: "See the simulator",
    to: "https://trust-card-generator.intuition.box",
};
/// Static card preview image.
pub const CARD_PREVIEW_IMAGE: &str = "/img/card-placeholder.png";

// Access & Growth
/// Callout primary CTA.
pub const ACCESS_PRIMARY: Cta = Cta {
    label: "See invitations",
    to: "/docs/tutorial/invitations",
};
/// Callout secondary CTA.
pub const ACCESS_SECONDARY: Cta = Cta {
    label: "Relic Holder ?",
    to: "/docs/tutorial/relic-holder",
};
/// Bullet points closing the callout.
pub const ACCESS_CHECKLIST: &[&str] = &[
    "Ownership → through minting, chests, and relics leading to cards.",
    "Reputation → mapped in the trust graph and explored via the reputation checker.",
    "Identity → enhanced by NFT formats, physical editions, and personal domains.",
];

// Diagram
/// Iframe source of the embedded diagram.
pub const DIAGRAM_EMBED_URL: &str = "https://whimsical.com/embed/WPU73HZ7RAHdh3vjNfkPrU";
/// Iframe height in pixels.
pub const DIAGRAM_HEIGHT: &str = "600";

/// Waves in display order with exactly the [`ACTIVE_WAVE`] marked.
pub fn wave_states() -> Vec<WaveState> {
    WAVES
        .iter()
        .map(|&label| WaveState {
            label,
            active: label == ACTIVE_WAVE,
        })
        .collect()
}

/// Every link target on the page, in document order, without duplicates.
pub fn page_links() -> Vec<&'static str> {
    let ctas = [
        HEADER_PRIMARY,
        HEADER_SECONDARY,
        HERO_PRIMARY,
        HERO_SECONDARY,
        TRUST_GRAPH,
        REPUTATION_CHECKER,
        SIMULATOR,
        ACCESS_PRIMARY,
        ACCESS_SECONDARY,
    ];
    let mut links: Vec<&'static str> = Vec::new();
    let targets = ctas
        .iter()
        .map(|cta| cta.to)
        .chain(TILES.iter().map(|tile| tile.destination));
    for target in targets {
        if !links.contains(&target) {
            links.push(target);
        }
    }
    links
}

/// Whether a link target leaves the site.
pub fn is_external(to: &str) -> bool {
    to.starts_with("https://") || to.starts_with("http://")
}

/// Serializable snapshot of the page configuration.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Page title
    pub title: &'static str,
    /// Page meta description
    pub description: &'static str,
    /// Grid tiles in order
    pub tiles: &'static [Tile],
    /// Waves with their active flag
    pub waves: Vec<WaveState>,
    /// Label of the active wave
    pub active_wave: &'static str,
    /// Step flow
    pub steps: &'static [Step],
    /// Every link target on the page
    pub links: Vec<&'static str>,
}

impl Manifest {
    /// Manifest of the page as currently configured.
    pub fn current() -> Self {
        Self {
            title: PAGE_TITLE,
            description: PAGE_DESCRIPTION,
            tiles: TILES,
            waves: wave_states(),
            active_wave: ACTIVE_WAVE,
            steps: STEPS,
            links: page_links(),
        }
    }
}
