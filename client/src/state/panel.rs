//! Open/closed flag for a slide-over surface.
//!
//! Each page owns its own instance; opening the dashboard's notification
//! panel has no effect on any other page.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Visibility of one slide-over. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
