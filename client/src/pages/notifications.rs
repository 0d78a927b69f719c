//! Full notification history with category filter chips.
//!
//! ARCHITECTURE
//! ============
//! Owns its own `NotificationStore`, separate from the dashboard's
//! slide-over, plus the active `FilterState`. Reads made here do not show
//! up on the dashboard and vice versa.

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::icons::Icon;
use crate::components::notification_row::NotificationRow;
use crate::components::page_header::PageHeader;
use crate::data::seed;
use crate::state::filter::{CategoryFilter, FilterState};
use crate::state::notifications::NotificationStore;
use crate::util::icon::IconKind;

/// Notifications page.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = RwSignal::new(NotificationStore::new(seed::feed_notifications()));
    let filter = RwSignal::new(FilterState::default());

    let unread = Signal::derive(move || store.with(NotificationStore::unread_count));

    let mark_all_read = move |_| {
        store.update(NotificationStore::mark_all_read);
        leptos::logging::log!("notifications: marked all read");
    };

    let on_open = Callback::new(move |id: String| {
        leptos::logging::log!("notifications: marked {id} read");
        store.update(|s| s.mark_read(&id));
    });

    let chips = CategoryFilter::ALL
        .into_iter()
        .map(|f| {
            let active = move || filter.get().active() == f;
            view! {
                <button
                    class="filter-chip"
                    class:filter-chip--active=active
                    on:click=move |_| {
                        leptos::logging::log!("notifications: filter {f}");
                        filter.update(|s| s.set_filter(f));
                    }
                >
                    {f.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let visible = move || {
        let state = filter.get();
        store.with(|s| state.visible(s).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="app-layout">
            <AppSidebar unread=unread/>

            <div class="app-layout__main">
                <PageHeader title="Notifications" subtitle="Stay updated on your family's movements">
                    <button class="text-button" on:click=mark_all_read>
                        <Icon kind=IconKind::Check/>
                        "Mark all read"
                    </button>
                </PageHeader>

                <div class="app-layout__content">
                    <div class="filter-bar">{chips}</div>

                    <div class="notifications-page__list">
                        {move || {
                            let rows = visible();
                            if rows.is_empty() {
                                view! {
                                    <p class="notifications-page__empty">"No notifications in this category."</p>
                                }
                                    .into_any()
                            } else {
                                rows.into_iter()
                                    .enumerate()
                                    .map(|(index, notification)| {
                                        view! { <NotificationRow notification=notification index=index on_open=on_open/> }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
