//! Local toggle state for the settings page.
//!
//! DESIGN
//! ======
//! Values live only as long as the page instance. Each preference carries
//! its own copy text and default so the page renders straight from
//! `Preference::ALL`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::collections::HashMap;

/// Settings page card a preference is rendered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSection {
    Notifications,
    Tracking,
}

impl SettingsSection {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::Tracking => "Tracking",
        }
    }
}

/// A single on/off preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preference {
    SafeZoneArrivals,
    SafeZoneDepartures,
    LowBattery,
    OutsideSafeZones,
    HighAccuracy,
    LocationHistory,
    SpeedAlerts,
}

impl Preference {
    /// Every preference in display order.
    pub const ALL: [Preference; 7] = [
        Self::SafeZoneArrivals,
        Self::SafeZoneDepartures,
        Self::LowBattery,
        Self::OutsideSafeZones,
        Self::HighAccuracy,
        Self::LocationHistory,
        Self::SpeedAlerts,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SafeZoneArrivals => "Safe zone arrivals",
            Self::SafeZoneDepartures => "Safe zone departures",
            Self::LowBattery => "Low battery alerts",
            Self::OutsideSafeZones => "Outside safe zones",
            Self::HighAccuracy => "High accuracy mode",
            Self::LocationHistory => "Location history",
            Self::SpeedAlerts => "Speed alerts",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::SafeZoneArrivals => "Get notified when a child arrives at a safe zone",
            Self::SafeZoneDepartures => "Get notified when a child leaves a safe zone",
            Self::LowBattery => "Receive alerts when a child's device battery is low",
            Self::OutsideSafeZones => "Alert when a child is not in any safe zone",
            Self::HighAccuracy => "Uses more battery but provides precise location",
            Self::LocationHistory => "Store location history for the past 7 days",
            Self::SpeedAlerts => "Notify when a child is moving above normal speed",
        }
    }

    #[must_use]
    pub fn section(self) -> SettingsSection {
        match self {
            Self::SafeZoneArrivals | Self::SafeZoneDepartures | Self::LowBattery | Self::OutsideSafeZones => {
                SettingsSection::Notifications
            }
            Self::HighAccuracy | Self::LocationHistory | Self::SpeedAlerts => SettingsSection::Tracking,
        }
    }

    /// Initial value before the user touches the toggle.
    #[must_use]
    pub fn default_enabled(self) -> bool {
        !matches!(self, Self::SpeedAlerts)
    }

    /// Preferences belonging to `section`, in display order.
    pub fn in_section(section: SettingsSection) -> impl Iterator<Item = Preference> {
        Self::ALL.into_iter().filter(move |p| p.section() == section)
    }
}

/// Current toggle values for one settings page instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    values: HashMap<Preference, bool>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self { values: Preference::ALL.into_iter().map(|p| (p, p.default_enabled())).collect() }
    }
}

impl SettingsState {
    #[must_use]
    pub fn is_enabled(&self, preference: Preference) -> bool {
        self.values
            .get(&preference)
            .copied()
            .unwrap_or_else(|| preference.default_enabled())
    }

    pub fn set(&mut self, preference: Preference, enabled: bool) {
        self.values.insert(preference, enabled);
    }

    /// Flip `preference` and return the new value.
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let next = !self.is_enabled(preference);
        self.set(preference, next);
        next
    }
}
