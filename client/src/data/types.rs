//! Record types for tracked people, notifications, safe zones, and accounts.
//!
//! DESIGN
//! ======
//! Records are plain owned data. Identifiers are strings so seed data and
//! any future feed can share the same shape. Notifications reference the
//! person they describe through `person_id` rather than by title text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::icon::IconKind;

// =============================================================================
// TRACKED PERSON
// =============================================================================

/// Current safety status of a tracked person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonStatus {
    /// Inside a safe zone.
    Safe,
    /// Needs attention; rendered as "Alert".
    Warning,
    /// Outside every safe zone but stationary.
    Away,
    /// In transit.
    Moving,
}

impl PersonStatus {
    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Warning => "Alert",
            Self::Away => "Away",
            Self::Moving => "Moving",
        }
    }
}

/// A family member whose simulated location is shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedPerson {
    pub id: String,
    pub name: String,
    /// Avatar image URL.
    pub avatar_url: String,
    pub status: PersonStatus,
    /// Human-readable place label, e.g. `"Maple Avenue"`.
    pub location: String,
    /// Device battery percentage as reported.
    pub battery: u8,
    /// Display string such as `"5 min ago"`; not a timestamp.
    pub last_seen: String,
    /// Part of the record, not used for marker placement.
    pub lat: f64,
    pub lng: f64,
}

impl TrackedPerson {
    /// Battery percentage clamped to `0..=100`.
    #[must_use]
    pub fn battery_level(&self) -> u8 {
        self.battery.min(100)
    }
}

// =============================================================================
// NOTIFICATION
// =============================================================================

/// Notification classification used for icons and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arrival,
    Departure,
    Alert,
    Battery,
}

impl Category {
    /// Lowercase label matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Departure => "departure",
            Self::Alert => "alert",
            Self::Battery => "battery",
        }
    }
}

/// A single notification. Only `read` changes after creation, and only
/// from `false` to `true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub category: Category,
    pub title: String,
    pub message: String,
    /// Display time such as `"2 min ago"` or `"8:02 AM"`.
    pub time: String,
    /// Day-group label (`"Today"`, `"Yesterday"`) when the feed shows one.
    #[serde(default)]
    pub date: Option<String>,
    /// The tracked person this notification is about.
    #[serde(default)]
    pub person_id: Option<String>,
    pub read: bool,
}

// =============================================================================
// SAFE ZONE
// =============================================================================

/// A named geofenced area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeZone {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Display radius such as `"200m"`.
    pub radius: String,
    /// Names of the people this zone applies to.
    pub members: Vec<String>,
    pub active: bool,
}

// =============================================================================
// USER ACCOUNT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Parent,
    Admin,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// A platform account listed on the admin page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Number of children linked to the account.
    pub children: u32,
    pub status: AccountStatus,
    /// Display label such as `"Jan 2024"`.
    pub joined: String,
}

/// The signed-in user shown in the sidebar footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A labelled headline figure for a stat card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
    pub icon: IconKind,
    pub tone: StatTone,
}

/// Accent color family for a stat card icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Accent,
    Safe,
    Warning,
}
