//! Simulated map with zone overlays and child markers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markers are placed from the fixed offset table in `util::map_layout`,
//! not from coordinates. Marker clicks report the child id through
//! `on_select`; the highlighted marker follows the page's selection.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::types::{PersonStatus, TrackedPerson};
use crate::util::icon::IconKind;
use crate::util::map_layout::{ZONE_OVERLAYS, marker_offset};
use crate::util::status::status_modifier;

/// Map panel for the dashboard.
#[component]
pub fn MapView(
    people: Vec<TrackedPerson>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let zones = ZONE_OVERLAYS
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let style = format!("{}animation-delay:{}ms;", zone.style(), 300 + i * 200);
            view! {
                <div class="map-view__zone" style=style>
                    <Icon kind=IconKind::Shield/>
                    <span class="map-view__zone-label">{zone.label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let markers = people
        .into_iter()
        .enumerate()
        .map(|(i, person)| {
            let style = format!("{}animation-delay:{}ms;", marker_offset(i).style(), 200 + i * 150);
            let tone = status_modifier(person.status);
            let is_selected = {
                let id = person.id.clone();
                move || selected.get().as_deref() == Some(id.as_str())
            };
            let id = person.id.clone();
            let moving = person.status == PersonStatus::Moving;

            view! {
                <div class="map-view__marker" style=style on:click=move |_| on_select.run(id.clone())>
                    <Show when=is_selected.clone()>
                        <div class=format!("map-view__ripple map-view__ripple--{tone}")></div>
                    </Show>
                    <div class="map-view__pin">
                        <div class="map-view__avatar" class:map-view__avatar--selected=is_selected>
                            <img src=person.avatar_url alt=person.name.clone()/>
                        </div>
                        <div class=format!("map-view__pointer map-view__pointer--{tone}")></div>
                        <span class="map-view__name">{person.name}</span>
                    </div>
                    <Show when=move || moving>
                        <div class="map-view__moving">
                            <Icon kind=IconKind::Navigation/>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="map-view">
            <div class="map-view__backdrop"></div>
            <svg class="map-view__grid" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern id="map-grid" width="60" height="60" patternUnits="userSpaceOnUse">
                        <path d="M 60 0 L 0 0 0 60" fill="none" stroke-width="0.5"></path>
                    </pattern>
                </defs>
                <rect width="100%" height="100%" fill="url(#map-grid)"></rect>
            </svg>

            {zones}
            {markers}

            <div class="map-view__legend">
                <span class="map-view__legend-item">
                    <span class="map-view__legend-dot map-view__legend-dot--safe"></span>
                    "Safe Zone"
                </span>
                <span class="map-view__legend-item">
                    <span class="map-view__legend-dot map-view__legend-dot--moving"></span>
                    "Moving"
                </span>
                <span class="map-view__legend-item">
                    <span class="map-view__legend-dot map-view__legend-dot--warning"></span>
                    "Alert"
                </span>
            </div>

            <div class="map-view__zoom">
                <button class="map-view__zoom-btn" title="Zoom in">"+"</button>
                <button class="map-view__zoom-btn" title="Zoom out">"\u{2212}"</button>
            </div>
        </div>
    }
}
