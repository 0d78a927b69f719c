//! Notification list with read tracking and category filtering.
//!
//! DESIGN
//! ======
//! One store per rendering context. The dashboard slide-over and the
//! notifications page each build their own instance from seed data; there
//! is no shared global list. The unread count is derived on every call
//! rather than cached, so it can never drift from the records.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::data::types::Notification;
use crate::state::filter::CategoryFilter;

/// Owns the notifications for one page instance, in seed order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationStore {
    items: Vec<Notification>,
}

impl NotificationStore {
    /// Build a store from seed records. Order is preserved as given.
    #[must_use]
    pub fn new(seed: Vec<Notification>) -> Self {
        Self { items: seed }
    }

    /// Notifications passing `filter`, in insertion order.
    #[must_use]
    pub fn list(&self, filter: CategoryFilter) -> Vec<&Notification> {
        self.items.iter().filter(|n| filter.matches(n)).collect()
    }

    /// Notifications about `person_id`, in insertion order.
    #[must_use]
    pub fn for_person(&self, person_id: &str) -> Vec<&Notification> {
        self.items
            .iter()
            .filter(|n| n.person_id.as_deref() == Some(person_id))
            .collect()
    }

    /// Number of records not yet read.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark every record read.
    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    /// Mark the record with `id` read. Unknown ids are ignored.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
