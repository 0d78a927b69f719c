//! Which tracked person is in focus on the dashboard.
//!
//! The map marker and the roster card both read this one value, so they
//! always highlight the same person.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Single-select focus. `None` means nothing is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new(initial: Option<String>) -> Self {
        Self { selected: initial }
    }

    /// Focus `id`, replacing any previous selection. Ids are not checked
    /// against the roster; an unknown id simply highlights nothing.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.current() == Some(id)
    }
}
