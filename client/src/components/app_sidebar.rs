//! Navigation sidebar with route highlighting and the unread badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every page. The notifications badge is bound to whichever
//! store the page passes in, so it always matches the list the user sees.
//! On narrow screens the same content opens as a drawer.

#[cfg(test)]
#[path = "app_sidebar_test.rs"]
mod app_sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::icons::Icon;
use crate::data::seed;
use crate::state::panel::PanelState;
use crate::util::format::{badge_count, initials};
use crate::util::icon::IconKind;

/// A sidebar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub label: &'static str,
    pub icon: IconKind,
    pub path: &'static str,
    /// Whether this entry shows the unread badge.
    pub badge: bool,
}

pub(crate) const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Dashboard", icon: IconKind::Dashboard, path: "/", badge: false },
    NavItem { label: "Safe Zones", icon: IconKind::Shield, path: "/safe-zones", badge: false },
    NavItem { label: "Notifications", icon: IconKind::Bell, path: "/notifications", badge: true },
    NavItem { label: "Admin", icon: IconKind::Users, path: "/admin", badge: false },
    NavItem { label: "Settings", icon: IconKind::Settings, path: "/settings", badge: false },
];

/// Whether `item` is the entry for `pathname`. Only exact matches count.
pub(crate) fn is_active(item: &NavItem, pathname: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    item.path == trimmed
}

/// Badge text for `item`, or `None` when it carries no badge or nothing is
/// unread.
pub(crate) fn nav_badge(item: &NavItem, unread: usize) -> Option<String> {
    (item.badge && unread > 0).then(|| badge_count(unread))
}

/// Left navigation for every page.
#[component]
pub fn AppSidebar(#[prop(into)] unread: Signal<usize>) -> impl IntoView {
    let drawer = RwSignal::new(PanelState::default());

    view! {
        <button class="app-sidebar__mobile-toggle" on:click=move |_| drawer.update(PanelState::open) title="Open menu">
            <Icon kind=IconKind::Menu/>
        </button>

        <Show when=move || drawer.get().is_open()>
            <div class="app-sidebar__backdrop" on:click=move |_| drawer.update(PanelState::close)></div>
            <div class="app-sidebar app-sidebar--drawer">
                <button class="app-sidebar__drawer-close" on:click=move |_| drawer.update(PanelState::close) title="Close menu">
                    <Icon kind=IconKind::Close/>
                </button>
                <SidebarContent unread=unread drawer=drawer/>
            </div>
        </Show>

        <div class="app-sidebar app-sidebar--desktop">
            <SidebarContent unread=unread drawer=drawer/>
        </div>
    }
}

#[component]
fn SidebarContent(unread: Signal<usize>, drawer: RwSignal<PanelState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let user = seed::current_user();
    let user_initials = initials(&user.name);

    let items = NAV_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            let active = move || is_active(&item, &pathname.get());
            view! {
                <a
                    href=item.path
                    class="app-sidebar__nav-item"
                    class:app-sidebar__nav-item--active=active
                    on:click=move |_| drawer.update(PanelState::close)
                >
                    <Icon kind=item.icon/>
                    {item.label}
                    {move || {
                        nav_badge(&item, unread.get()).map(|text| view! { <span class="app-sidebar__badge">{text}</span> })
                    }}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">
                    <Icon kind=IconKind::MapPin/>
                </div>
                <div>
                    <h1 class="app-sidebar__name">"SafeTrack"</h1>
                    <p class="app-sidebar__tagline">"Family Safety"</p>
                </div>
            </div>

            <nav class="app-sidebar__nav">{items}</nav>

            <div class="app-sidebar__user">
                <div class="app-sidebar__avatar">{user_initials}</div>
                <div class="app-sidebar__user-text">
                    <p class="app-sidebar__user-name">{user.name}</p>
                    <p class="app-sidebar__user-role">{user.role.label()}</p>
                </div>
                <button class="app-sidebar__logout" title="Sign out">
                    <Icon kind=IconKind::LogOut/>
                </button>
            </div>
        </div>
    }
}
