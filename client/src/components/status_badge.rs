//! Pill badge for a tracked person's status.

use leptos::prelude::*;

use crate::data::types::PersonStatus;
use crate::util::status::{status_modifier, status_pulses};

/// Colored status pill; safe and moving statuses carry a pulsing dot.
#[component]
pub fn StatusBadge(status: PersonStatus) -> impl IntoView {
    let class = format!("status-badge status-badge--{}", status_modifier(status));

    view! {
        <span class=class>
            <Show when=move || status_pulses(status)>
                <span class="status-badge__pulse"></span>
            </Show>
            {status.label()}
        </span>
    }
}
