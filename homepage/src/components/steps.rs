//! "How it works" step flow

use leptos::prelude::*;

use super::Heading;
use crate::content::STEPS;
use crate::types::Step;

/// Numbered step cards, rendered in ascending step order.
#[component]
pub fn HowItWorks(
    /// Steps to show, the configured flow by default
    #[prop(default = STEPS)]
    steps: &'static [Step],
) -> impl IntoView {
    let mut ordered = steps.to_vec();
    ordered.sort_by_key(|step| step.number);

    view! {
        <div class="container">
            <Heading level=2 class="block-title">"How it works"</Heading>
            <div class="flow-grid" aria-label="Trust Card flow">
                {ordered.into_iter().map(|step| view! { <StepCard step=step /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn StepCard(step: Step) -> impl IntoView {
    view! {
        <div class="flow-card">
            <div class="flow-top">
                <span class="flow-num">{step.number.to_string()}</span>
                <span class="flow-icon" aria-hidden="true">{step.icon}</span>
            </div>
            <div class="flow-title">{step.title}</div>
            <div class="flow-desc">{step.description}</div>
        </div>
    }
}
