//! Admin panel: platform counters and the user account table.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::icons::Icon;
use crate::components::page_header::PageHeader;
use crate::components::stat_card::StatCard;
use crate::data::seed;
use crate::data::types::{AccountStatus, Role, UserAccount};
use crate::util::icon::IconKind;

/// Accounts whose name or email contains `query`, ignoring case. A blank
/// query keeps everything.
pub(crate) fn filter_accounts(accounts: &[UserAccount], query: &str) -> Vec<UserAccount> {
    let needle = query.trim().to_lowercase();
    accounts
        .iter()
        .filter(|a| {
            needle.is_empty() || a.name.to_lowercase().contains(&needle) || a.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Admin page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let unread = Signal::stored(super::seeded_unread_count());
    let accounts = StoredValue::new(seed::user_accounts());
    let query = RwSignal::new(String::new());

    let stat_cards = seed::admin_stats()
        .into_iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatCard stat=stat index=index/> })
        .collect::<Vec<_>>();

    let rows = move || {
        let matches = accounts.with_value(|all| filter_accounts(all, &query.get()));
        if matches.is_empty() {
            return view! {
                <tr>
                    <td class="account-table__empty" colspan="6">"No matching users."</td>
                </tr>
            }
                .into_any();
        }
        matches
            .into_iter()
            .enumerate()
            .map(|(i, user)| {
                let style = format!("animation-delay:{}ms;", 200 + i * 50);
                let active = user.status == AccountStatus::Active;
                let is_admin = user.role == Role::Admin;
                let status_icon = if active { IconKind::UserCheck } else { IconKind::UserX };
                view! {
                    <tr class="account-table__row" style=style>
                        <td>
                            <p class="account-table__name">{user.name}</p>
                            <p class="account-table__email">{user.email}</p>
                        </td>
                        <td>
                            <span class="role-pill" class:role-pill--admin=is_admin>
                                {user.role.label()}
                            </span>
                        </td>
                        <td>{user.children}</td>
                        <td>
                            <span class="account-table__status" class:account-table__status--active=active>
                                <Icon kind=status_icon/>
                                {user.status.label()}
                            </span>
                        </td>
                        <td class="account-table__muted">{user.joined}</td>
                        <td class="account-table__actions">
                            <button class="icon-button icon-button--ghost" title="More">
                                <Icon kind=IconKind::More/>
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="app-layout">
            <AppSidebar unread=unread/>

            <div class="app-layout__main">
                <PageHeader title="Admin Panel" subtitle="Manage users and system performance">
                    <button class="btn">
                        <Icon kind=IconKind::Settings/>
                        "System Settings"
                    </button>
                </PageHeader>

                <div class="app-layout__content">
                    <div class="stat-grid">{stat_cards}</div>

                    <div class="account-table">
                        <div class="account-table__header">
                            <h2>"User Accounts"</h2>
                            <div class="search-box search-box--small">
                                <Icon kind=IconKind::Search/>
                                <input
                                    class="search-box__input"
                                    type="text"
                                    placeholder="Search users..."
                                    prop:value=move || query.get()
                                    on:input=move |ev| query.set(event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="account-table__scroll">
                            <table>
                                <thead>
                                    <tr>
                                        <th>"User"</th>
                                        <th>"Role"</th>
                                        <th>"Children"</th>
                                        <th>"Status"</th>
                                        <th>"Joined"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
