//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and record cards. They receive state as
//! signals and report interactions through callbacks; none of them owns
//! state that outlives its page.

pub mod app_sidebar;
pub mod child_card;
pub mod icons;
pub mod map_view;
pub mod notification_panel;
pub mod notification_row;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;
