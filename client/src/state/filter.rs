//! Single-selection category filter for the notifications page.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::fmt;
use std::str::FromStr;

use crate::data::types::{Category, Notification};
use crate::state::notifications::NotificationStore;

/// One of the selectable filter chips. `All` is a real value, not the
/// absence of one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Arrival,
    Departure,
    Alert,
    Battery,
}

impl CategoryFilter {
    /// Every filter in chip display order.
    pub const ALL: [CategoryFilter; 5] = [Self::All, Self::Arrival, Self::Departure, Self::Alert, Self::Battery];

    /// Lowercase chip label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.category() {
            None => "all",
            Some(category) => category.as_str(),
        }
    }

    /// The category this filter narrows to, or `None` for `All`.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Arrival => Some(Category::Arrival),
            Self::Departure => Some(Category::Departure),
            Self::Alert => Some(Category::Alert),
            Self::Battery => Some(Category::Battery),
        }
    }

    #[must_use]
    pub fn matches(self, notification: &Notification) -> bool {
        self.category().is_none_or(|c| c == notification.category)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Arrival => Self::Arrival,
            Category::Departure => Self::Departure,
            Category::Alert => Self::Alert,
            Category::Battery => Self::Battery,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no filter.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == raw)
            .ok_or_else(|| ParseCategoryError(raw.to_owned()))
    }
}

/// Active filter for one notifications page instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    active: CategoryFilter,
}

impl FilterState {
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active = filter;
    }

    #[must_use]
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Records from `store` that pass the active filter.
    #[must_use]
    pub fn visible<'a>(&self, store: &'a NotificationStore) -> Vec<&'a Notification> {
        store.list(self.active)
    }
}
