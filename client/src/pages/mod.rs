//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and delegates rendering details
//! to `components`. No state is shared between pages.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod admin;
pub mod dashboard;
pub mod notifications;
pub mod safe_zones;
pub mod settings;

use crate::data::seed;
use crate::state::notifications::NotificationStore;

/// Unread count for the sidebar badge on pages that keep no store of their
/// own: a fresh notifications-page store, before any reads.
pub(crate) fn seeded_unread_count() -> usize {
    NotificationStore::new(seed::feed_notifications()).unread_count()
}
