//! Status, battery, and category styling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components turn records into BEM class modifiers through these helpers
//! so the mapping is tested once instead of inlined in every view.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::data::types::{Category, PersonStatus};
use crate::util::icon::IconKind;

/// Class modifier for a person status (`safe`, `warning`, `away`, `moving`).
#[must_use]
pub fn status_modifier(status: PersonStatus) -> &'static str {
    match status {
        PersonStatus::Safe => "safe",
        PersonStatus::Warning => "warning",
        PersonStatus::Away => "away",
        PersonStatus::Moving => "moving",
    }
}

/// Whether the badge shows an animated pulse dot.
#[must_use]
pub fn status_pulses(status: PersonStatus) -> bool {
    matches!(status, PersonStatus::Safe | PersonStatus::Moving)
}

/// Coarse battery health used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryTone {
    Good,
    Low,
    Critical,
}

impl BatteryTone {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }
}

/// Above 50% is good, above 20% is low, anything else is critical.
#[must_use]
pub fn battery_tone(level: u8) -> BatteryTone {
    match level {
        51..=u8::MAX => BatteryTone::Good,
        21..=50 => BatteryTone::Low,
        _ => BatteryTone::Critical,
    }
}

/// Icon shown beside a notification of `category`.
#[must_use]
pub fn category_icon(category: Category) -> IconKind {
    match category {
        Category::Arrival => IconKind::Shield,
        Category::Departure => IconKind::MapPin,
        Category::Alert | Category::Battery => IconKind::AlertTriangle,
    }
}

/// Color family modifier for a notification icon tile.
#[must_use]
pub fn category_tone(category: Category) -> &'static str {
    match category {
        Category::Arrival => "safe",
        Category::Departure => "accent",
        Category::Alert => "warning",
        Category::Battery => "destructive",
    }
}
