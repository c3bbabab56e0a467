//! Root document component - the complete homepage

use leptos::prelude::*;

use super::{AccessGrowthBlock, DiagramEmbed, Hero, HomepageHeader, HowItWorks, Layout, TileGrid};
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};

/// The complete HTML document for the homepage
#[component]
pub fn HomepageDocument() -> impl IntoView {
    view! {
        <Layout title=PAGE_TITLE description=PAGE_DESCRIPTION>
            <HomepageHeader />
            <main>
                <section class="main-section">
                    <Hero />
                    <AccessGrowthBlock />
                    <HowItWorks />
                    <TileGrid />
                    <DiagramEmbed />
                </section>
            </main>
        </Layout>
    }
}
