//! Slide-over notification panel for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and mutates the dashboard's own `NotificationStore`; visibility is
//! the dashboard's `PanelState`. Neither is shared with the notifications
//! page.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::components::notification_row::NotificationRow;
use crate::state::filter::CategoryFilter;
use crate::state::notifications::NotificationStore;
use crate::state::panel::PanelState;
use crate::util::icon::IconKind;

/// Right-hand slide-over listing the dashboard's notifications.
#[component]
pub fn NotificationPanel(store: RwSignal<NotificationStore>, panel: RwSignal<PanelState>) -> impl IntoView {
    let is_open = move || panel.get().is_open();
    let unread = move || store.with(NotificationStore::unread_count);
    let close = move |_| panel.update(PanelState::close);

    let mark_all_read = move |_| {
        store.update(NotificationStore::mark_all_read);
        leptos::logging::log!("notification panel: marked all read");
    };

    let on_open = Callback::new(move |id: String| {
        leptos::logging::log!("notification panel: marked {id} read");
        store.update(|s| s.mark_read(&id));
    });

    let rows = move || {
        store
            .with(|s| s.list(CategoryFilter::All).into_iter().cloned().collect::<Vec<_>>())
            .into_iter()
            .enumerate()
            .map(|(index, notification)| {
                view! { <NotificationRow notification=notification index=index on_open=on_open compact=true/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=is_open>
            <div class="notification-panel__backdrop" on:click=close></div>
            <aside class="notification-panel">
                <div class="notification-panel__header">
                    <div class="notification-panel__title">
                        <Icon kind=IconKind::Bell/>
                        <h2>"Notifications"</h2>
                        <Show when=move || { unread() > 0 }>
                            <span class="notification-panel__count">{unread}</span>
                        </Show>
                    </div>
                    <div class="notification-panel__actions">
                        <button class="notification-panel__mark-all" on:click=mark_all_read>
                            "Mark all read"
                        </button>
                        <button class="notification-panel__close" on:click=close title="Close">
                            <Icon kind=IconKind::Close/>
                        </button>
                    </div>
                </div>
                <div class="notification-panel__list">{rows}</div>
            </aside>
        </Show>
    }
}
