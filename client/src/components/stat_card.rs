//! Headline figure card used on the dashboard and admin pages.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::types::{Stat, StatTone};

fn tone_modifier(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Accent => "accent",
        StatTone::Safe => "safe",
        StatTone::Warning => "warning",
    }
}

#[component]
pub fn StatCard(stat: Stat, index: usize) -> impl IntoView {
    let icon_class = format!("stat-card__icon--{}", tone_modifier(stat.tone));
    let style = format!("animation-delay:{}ms;", index * 100);

    view! {
        <div class="stat-card" style=style>
            <div class="stat-card__label">
                <Icon kind=stat.icon class=icon_class/>
                <span>{stat.label}</span>
            </div>
            <p class="stat-card__value">{stat.value}</p>
        </div>
    }
}
