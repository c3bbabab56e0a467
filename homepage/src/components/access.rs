//! Access & Growth callout

use leptos::prelude::*;

use super::{Heading, Link};
use crate::content::{ACCESS_CHECKLIST, ACCESS_PRIMARY, ACCESS_SECONDARY};

/// Callout on how invitations and Trust Score drive access.
#[component]
pub fn AccessGrowthBlock() -> impl IntoView {
    view! {
        <div class="container">
            <div class="ts-block">
                <div class="ts-badge">"Access & Growth"</div>
                <Heading level=3 class="ts-title">
                    <span class="ts-highlight">"Invitation"</span>
                    " gives mint access. "
                    <span class="ts-highlight">"Trust Score"</span>
                    " unlocks more invitations."
                </Heading>
                <p class="ts-lead">
                    "Invitations grant access to minting. As trust grows across the network, "
                    "holders unlock additional invitations to onboard others."
                </p>
                <div class="cta-row">
                    <Link to=ACCESS_PRIMARY.to class="button btn-primary">{ACCESS_PRIMARY.label}</Link>
                    <Link to=ACCESS_SECONDARY.to class="button btn-secondary">{ACCESS_SECONDARY.label}</Link>
                </div>
                <ul class="check-list">
                    {ACCESS_CHECKLIST.iter().map(|&item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
