//! Dashboard page: live map, family roster, and the notification slide-over.
//!
//! ARCHITECTURE
//! ============
//! The page owns three independent pieces of state: the notification store
//! behind the slide-over, the slide-over's visibility, and the focused
//! child. Map and roster both render from the one selection signal, so a
//! click in either highlights the same child in both.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::child_card::ChildCard;
use crate::components::icons::Icon;
use crate::components::map_view::MapView;
use crate::components::notification_panel::NotificationPanel;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::data::seed;
use crate::data::types::{PersonStatus, Stat, StatTone, TrackedPerson};
use crate::state::filter::CategoryFilter;
use crate::state::notifications::NotificationStore;
use crate::state::panel::PanelState;
use crate::state::selection::SelectionState;
use crate::util::format::badge_count;
use crate::util::icon::IconKind;

/// Headline figures derived from the roster and the notification list.
pub(crate) fn dashboard_stats(people: &[TrackedPerson], store: &NotificationStore) -> Vec<Stat> {
    let in_safe_zones = people.iter().filter(|p| p.status == PersonStatus::Safe).count();
    let alerts = store.list(CategoryFilter::Alert).len() + store.list(CategoryFilter::Battery).len();

    vec![
        Stat { label: "Active Now", value: people.len().to_string(), icon: IconKind::Users, tone: StatTone::Accent },
        Stat { label: "In Safe Zones", value: in_safe_zones.to_string(), icon: IconKind::Shield, tone: StatTone::Safe },
        Stat { label: "Alerts Today", value: alerts.to_string(), icon: IconKind::TrendingUp, tone: StatTone::Warning },
    ]
}

/// Header subtitle summarizing whether anyone needs attention.
pub(crate) fn roster_summary(people: &[TrackedPerson]) -> String {
    match people.iter().filter(|p| p.status == PersonStatus::Warning).count() {
        0 => "All children are accounted for".to_owned(),
        1 => "1 child needs attention".to_owned(),
        n => format!("{n} children need attention"),
    }
}

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let people = seed::children();
    let store = RwSignal::new(NotificationStore::new(seed::panel_notifications()));
    let panel = RwSignal::new(PanelState::default());
    let selection = RwSignal::new(SelectionState::new(Some(seed::INITIAL_SELECTION.to_owned())));

    let stats = store.with_untracked(|s| dashboard_stats(&people, s));
    let summary = roster_summary(&people);
    let tracked = format!("{} tracked", people.len());

    let unread = Signal::derive(move || store.with(NotificationStore::unread_count));
    let selected = Signal::derive(move || selection.with(|s| s.current().map(str::to_owned)));

    let on_select = Callback::new(move |id: String| {
        leptos::logging::log!("dashboard: selected {id}");
        selection.update(|s| s.select(id));
    });

    let open_panel = move |_| panel.update(PanelState::open);

    let stat_cards = stats
        .into_iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatCard stat=stat index=index/> })
        .collect::<Vec<_>>();

    let roster = people
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, child)| {
            let id = child.id.clone();
            let is_selected = Signal::derive(move || selection.with(|s| s.is_selected(&id)));
            let style = format!("animation-delay:{}ms;", 300 + i * 100);
            view! {
                <div class="dashboard__roster-item" style=style>
                    <ChildCard child=child selected=is_selected on_select=on_select/>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-layout">
            <AppSidebar unread=unread/>

            <div class="app-layout__main">
                <PageHeader title="Dashboard" subtitle=summary>
                    <div class="search-box">
                        <Icon kind=IconKind::Search/>
                        <input class="search-box__input" type="text" placeholder="Search..."/>
                    </div>
                    <button class="icon-button" on:click=open_panel title="Notifications">
                        <Icon kind=IconKind::Bell/>
                        <Show when=move || { unread.get() > 0 }>
                            <span class="icon-button__badge">{move || badge_count(unread.get())}</span>
                        </Show>
                    </button>
                    <button class="icon-button icon-button--accent" title="Add family member">
                        <Icon kind=IconKind::Plus/>
                    </button>
                </PageHeader>

                <div class="app-layout__content">
                    <div class="stat-grid">{stat_cards}</div>

                    <div class="dashboard__grid">
                        <div class="dashboard__map">
                            <MapView people=people selected=selected on_select=on_select/>
                        </div>

                        <div class="dashboard__roster">
                            <div class="dashboard__roster-header">
                                <h2>"Family Members"</h2>
                                <span class="dashboard__roster-count">{tracked}</span>
                            </div>
                            {roster}
                            <button class="dashboard__add-member">
                                <Icon kind=IconKind::Plus/>
                                "Add Family Member"
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <NotificationPanel store=store panel=panel/>
        </div>
    }
}
