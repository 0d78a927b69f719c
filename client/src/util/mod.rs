//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure mapping and formatting helpers kept out of components so they can be
//! unit-tested without a reactive runtime.

pub mod format;
pub mod icon;
pub mod map_layout;
pub mod status;
