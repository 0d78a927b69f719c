//! Safe zone overview cards.

#[cfg(test)]
#[path = "safe_zones_test.rs"]
mod safe_zones_test;

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::icons::Icon;
use crate::components::page_header::PageHeader;
use crate::data::seed;
use crate::data::types::SafeZone;
use crate::util::icon::IconKind;

/// Comma-separated member names, or a placeholder when nobody is assigned.
pub(crate) fn member_list(zone: &SafeZone) -> String {
    if zone.members.is_empty() { "No members".to_owned() } else { zone.members.join(", ") }
}

/// Safe zones page.
#[component]
pub fn SafeZonesPage() -> impl IntoView {
    let unread = Signal::stored(super::seeded_unread_count());

    let cards = seed::safe_zones()
        .into_iter()
        .enumerate()
        .map(|(i, zone)| {
            let members = member_list(&zone);
            let style = format!("animation-delay:{}ms;", i * 100);
            let state = if zone.active { "Active" } else { "Inactive" };
            view! {
                <div class="zone-card" class:zone-card--inactive=!zone.active style=style>
                    <div class="zone-card__header">
                        <div class="zone-card__identity">
                            <div class="zone-card__icon">
                                <Icon kind=IconKind::Shield/>
                            </div>
                            <div>
                                <h3 class="zone-card__name">{zone.name}</h3>
                                <p class="zone-card__address">
                                    <Icon kind=IconKind::MapPin/>
                                    {zone.address}
                                </p>
                            </div>
                        </div>
                        <span class="zone-card__state">{state}</span>
                    </div>
                    <div class="zone-card__footer">
                        <div class="zone-card__detail">
                            <span class="zone-card__radius">{zone.radius}</span>
                            " radius \u{b7} "
                            {members}
                        </div>
                        <div class="zone-card__actions">
                            <button class="zone-card__action" title="Edit zone">
                                <Icon kind=IconKind::Edit/>
                            </button>
                            <button class="zone-card__action zone-card__action--danger" title="Delete zone">
                                <Icon kind=IconKind::Trash/>
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-layout">
            <AppSidebar unread=unread/>

            <div class="app-layout__main">
                <PageHeader title="Safe Zones" subtitle="Manage geofenced areas for your family">
                    <button class="btn btn--primary">
                        <Icon kind=IconKind::Plus/>
                        "Add Zone"
                    </button>
                </PageHeader>

                <div class="app-layout__content">
                    <div class="zone-grid">{cards}</div>
                </div>
            </div>
        </div>
    }
}
