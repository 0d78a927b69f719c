//! Client-side view-state models.
//!
//! DESIGN
//! ======
//! State is split by concern (notifications, filter, selection, panel,
//! settings) so each page composes only what it needs. Models are plain
//! structs; pages wrap them in `RwSignal`s and pass them to components as
//! props, so every instance is scoped to the page that built it.

pub mod filter;
pub mod notifications;
pub mod panel;
pub mod selection;
pub mod settings;
