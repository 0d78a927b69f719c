use super::*;

#[test]
fn defaults_are_on_except_speed_alerts() {
    let state = SettingsState::default();
    for preference in Preference::ALL {
        let expected = preference != Preference::SpeedAlerts;
        assert_eq!(state.is_enabled(preference), expected, "{preference:?}");
    }
}

#[test]
fn toggle_flips_and_reports_new_value() {
    let mut state = SettingsState::default();
    assert!(!state.toggle(Preference::HighAccuracy));
    assert!(!state.is_enabled(Preference::HighAccuracy));
    assert!(state.toggle(Preference::HighAccuracy));
    assert!(state.is_enabled(Preference::HighAccuracy));
}

#[test]
fn toggle_leaves_other_preferences_alone() {
    let mut state = SettingsState::default();
    state.toggle(Preference::LowBattery);
    assert!(state.is_enabled(Preference::SafeZoneArrivals));
    assert!(!state.is_enabled(Preference::SpeedAlerts));
}

#[test]
fn set_overrides_value() {
    let mut state = SettingsState::default();
    state.set(Preference::SpeedAlerts, true);
    assert!(state.is_enabled(Preference::SpeedAlerts));
}

#[test]
fn sections_partition_preferences() {
    let notifications: Vec<_> = Preference::in_section(SettingsSection::Notifications).collect();
    let tracking: Vec<_> = Preference::in_section(SettingsSection::Tracking).collect();
    assert_eq!(notifications.len(), 4);
    assert_eq!(tracking, vec![Preference::HighAccuracy, Preference::LocationHistory, Preference::SpeedAlerts]);
    assert_eq!(notifications.len() + tracking.len(), Preference::ALL.len());
}

#[test]
fn every_preference_has_copy() {
    for preference in Preference::ALL {
        assert!(!preference.label().is_empty());
        assert!(!preference.description().is_empty());
    }
    assert_eq!(SettingsSection::Tracking.title(), "Tracking");
}
