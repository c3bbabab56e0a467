//! Leptos UI components for the homepage.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server. Data comes from [`crate::content`]; site settings come from
//! context (see [`use_site_config`]).
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument
//! └── Layout
//!     ├── HomepageHeader
//!     └── <main>
//!         ├── Hero
//!         │   ├── WaveIndicator
//!         │   └── CardViewer
//!         ├── AccessGrowthBlock
//!         ├── HowItWorks
//!         │   └── StepCard (per step)
//!         ├── TileGrid
//!         │   └── BentoCard (per tile)
//!         └── DiagramEmbed
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_homepage`], but
//! single sections can be rendered on their own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use trustcard_homepage::components::TileGrid;
//!
//! let html = view! { <TileGrid /> }.to_html();
//! assert!(html.contains("bento-grid"));
//! ```

mod access;
mod diagram;
mod document;
mod header;
mod hero;
mod shell;
mod steps;
mod tiles;
mod waves;

pub use access::AccessGrowthBlock;
pub use diagram::DiagramEmbed;
pub use document::HomepageDocument;
pub use header::HomepageHeader;
pub use hero::Hero;
pub use shell::{Heading, Layout, Link, class_names, use_site_config};
pub use steps::HowItWorks;
pub use tiles::{BentoCard, TileGrid};
pub use waves::WaveIndicator;
