//! One notification entry, shared by the slide-over panel and the feed page.

use leptos::prelude::*;

use crate::components::icons::Icon;
use crate::data::types::Notification;
use crate::util::format::time_with_date;
use crate::util::icon::IconKind;
use crate::util::status::{category_icon, category_tone};

/// Notification row. Clicking reports the id through `on_open`, which the
/// owning page uses to mark it read. `compact` selects the panel layout.
#[component]
pub fn NotificationRow(
    notification: Notification,
    index: usize,
    on_open: Callback<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let Notification { id, category, title, message, time, date, read, .. } = notification;
    let tile_class = format!("notification-row__icon notification-row__icon--{}", category_tone(category));
    let style = format!("animation-delay:{}ms;", index * 50);
    let when = time_with_date(&time, date.as_deref());

    view! {
        <div
            class="notification-row"
            class:notification-row--compact=compact
            class:notification-row--unread=!read
            style=style
            on:click=move |_| on_open.run(id.clone())
        >
            <div class=tile_class>
                <Icon kind=category_icon(category)/>
            </div>
            <div class="notification-row__body">
                <p class="notification-row__title">{title}</p>
                <p class="notification-row__message">{message}</p>
                <p class="notification-row__time">
                    <Icon kind=IconKind::Clock/>
                    {when}
                </p>
            </div>
            <Show when=move || !read>
                <span class="notification-row__dot"></span>
            </Show>
        </div>
    }
}
