//! Settings page: notification and tracking toggles plus account details.

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::page_header::PageHeader;
use crate::data::seed;
use crate::state::settings::{Preference, SettingsSection, SettingsState};

/// Settings page.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let unread = Signal::stored(super::seeded_unread_count());
    let settings = RwSignal::new(SettingsState::default());
    let user = seed::current_user();

    let sections = [SettingsSection::Notifications, SettingsSection::Tracking]
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            let style = format!("animation-delay:{}ms;", i * 100);
            let rows = Preference::in_section(section)
                .map(|preference| view! { <ToggleRow preference=preference settings=settings/> })
                .collect::<Vec<_>>();
            view! {
                <section class="settings-card" style=style>
                    <h3 class="settings-card__title">{section.title()}</h3>
                    <div class="settings-card__rows">{rows}</div>
                </section>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="app-layout">
            <AppSidebar unread=unread/>

            <div class="app-layout__main">
                <PageHeader title="Settings" subtitle="Configure your tracking preferences"/>

                <div class="app-layout__content">
                    <div class="settings-page">
                        {sections}
                        <section class="settings-card" style="animation-delay:200ms;">
                            <h3 class="settings-card__title">"Account"</h3>
                            <div class="settings-card__rows">
                                <div class="settings-row">
                                    <div>
                                        <p class="settings-row__label">"Email"</p>
                                        <p class="settings-row__description">{user.email}</p>
                                    </div>
                                    <button class="link-button">"Change"</button>
                                </div>
                                <div class="settings-row">
                                    <div>
                                        <p class="settings-row__label">"Password"</p>
                                        <p class="settings-row__description">"Last changed 30 days ago"</p>
                                    </div>
                                    <button class="link-button">"Update"</button>
                                </div>
                            </div>
                        </section>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Labelled switch bound to one preference.
#[component]
fn ToggleRow(preference: Preference, settings: RwSignal<SettingsState>) -> impl IntoView {
    let on = move || settings.with(|s| s.is_enabled(preference));
    let toggle = move |_| {
        let mut next = false;
        settings.update(|s| next = s.toggle(preference));
        leptos::logging::log!("settings: {preference:?} -> {next}");
    };

    view! {
        <div class="settings-row">
            <div>
                <p class="settings-row__label">{preference.label()}</p>
                <p class="settings-row__description">{preference.description()}</p>
            </div>
            <button
                class="switch"
                class:switch--on=on
                role="switch"
                aria-checked=move || if on() { "true" } else { "false" }
                on:click=toggle
            >
                <span class="switch__thumb"></span>
            </button>
        </div>
    }
}
