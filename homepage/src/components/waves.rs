//! Wave indicator - the fixed wave list with the active wave highlighted

use leptos::prelude::*;

use super::{Link, class_names};
use crate::content::{REPUTATION_CHECKER, TRUST_GRAPH, wave_states};

/// Wave list with the active wave marked, plus the trust doc links.
#[component]
pub fn WaveIndicator() -> impl IntoView {
    view! {
        <div class="wave-wrap">
            <div class="wave-title">"Waves"</div>
            <ul class="wave-list">
                {wave_states()
                    .into_iter()
                    .map(|wave| {
                        let item_class = class_names(&[
                            Some("wave-item"),
                            wave.active.then_some("wave-item-active"),
                        ]);
                        let dot_class = class_names(&[
                            Some("wave-dot"),
                            wave.active.then_some("wave-dot-active"),
                        ]);
                        view! {
                            <li
                                data-wave=wave.label
                                aria-current=wave.active.then_some("true")
                                class=item_class
                            >
                                <span class=dot_class></span>
                                <span>{wave.label}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="wave-sub-note">
                "Access spreads via invitations. Trust Score increases invitation capacity."
            </div>
            <div class="wave-links">
                <Link to=TRUST_GRAPH.to class="link-inline">{TRUST_GRAPH.label}</Link>
                <span class="bullet"></span>
                <Link to=REPUTATION_CHECKER.to class="link-inline">{REPUTATION_CHECKER.label}</Link>
            </div>
        </div>
    }
}
