//! Hero section - headline, CTAs, wave indicator and the card preview

use leptos::prelude::*;

use super::{Heading, Link, WaveIndicator, use_site_config};
use crate::content::{CARD_PREVIEW_IMAGE, HERO_LEAD, HERO_PRIMARY, HERO_SECONDARY, SIMULATOR};

/// Two column hero: copy, CTAs and waves on the left, card preview on the right.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="container">
            <div class="row hero-row">
                <div class="col col--6">
                    <Heading level=1 class="hero-title">"Trust the network."</Heading>
                    <p class="hero-lead">{HERO_LEAD}</p>
                    <div class="cta-row">
                        <Link to=HERO_PRIMARY.to class="button btn-primary">{HERO_PRIMARY.label}</Link>
                        <Link to=HERO_SECONDARY.to class="button btn-secondary">{HERO_SECONDARY.label}</Link>
                    </div>
                    <WaveIndicator />
                </div>
                <div class="col col--6">
                    <CardViewer />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CardViewer() -> impl IntoView {
    let image_src = use_site_config().resolve(CARD_PREVIEW_IMAGE);

    view! {
        <div class="viewer">
            <div class="viewer-frame">
                <span class="viewer-badge">"Card preview"</span>
                <img src=image_src alt="Static preview of the Trust Card" class="viewer-image" />
            </div>
            <div class="viewer-caption">
                <Link to=SIMULATOR.to class="viewer-sim-btn">{SIMULATOR.label}</Link>
            </div>
        </div>
    }
}
