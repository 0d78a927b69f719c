//! Roster card for one tracked child.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::status_badge::StatusBadge;
use crate::data::types::TrackedPerson;
use crate::util::icon::IconKind;
use crate::util::status::{battery_tone, status_modifier};

/// Clickable summary of a child: avatar, status, location, battery, and
/// last-seen label. Highlighted while `selected` is true.
#[component]
pub fn ChildCard(
    child: TrackedPerson,
    #[prop(into)] selected: Signal<bool>,
    on_select: Callback<String>,
) -> impl IntoView {
    let id = child.id.clone();
    let level = child.battery_level();
    let dot_class = format!("child-card__status-dot child-card__status-dot--{}", status_modifier(child.status));
    let battery_class = format!("child-card__battery child-card__battery--{}", battery_tone(level).modifier());

    view! {
        <div
            class="child-card"
            class:child-card--selected=move || selected.get()
            on:click=move |_| on_select.run(id.clone())
        >
            <div class="child-card__avatar-wrap">
                <div class="child-card__avatar">
                    <img src=child.avatar_url.clone() alt=child.name.clone()/>
                </div>
                <span class=dot_class></span>
            </div>
            <div class="child-card__body">
                <div class="child-card__heading">
                    <h3 class="child-card__name">{child.name.clone()}</h3>
                    <StatusBadge status=child.status/>
                </div>
                <div class="child-card__location">
                    <Icon kind=IconKind::MapPin/>
                    <span>{child.location.clone()}</span>
                </div>
                <div class="child-card__meta">
                    <span class=battery_class>
                        <Icon kind=IconKind::Battery/>
                        {format!("{level}%")}
                    </span>
                    <span class="child-card__meta-item">
                        <Icon kind=IconKind::Clock/>
                        {child.last_seen.clone()}
                    </span>
                    <span class="child-card__meta-item">
                        <Icon kind=IconKind::Wifi/>
                        "GPS"
                    </span>
                </div>
            </div>
        </div>
    }
}
