use super::*;

fn person(battery: u8) -> TrackedPerson {
    TrackedPerson {
        id: "p".into(),
        name: "Pat".into(),
        avatar_url: String::new(),
        status: PersonStatus::Safe,
        location: "Home".into(),
        battery,
        last_seen: "Just now".into(),
        lat: 0.0,
        lng: 0.0,
    }
}

// =============================================================
// PersonStatus
// =============================================================

#[test]
fn warning_status_is_labelled_alert() {
    assert_eq!(PersonStatus::Warning.label(), "Alert");
    assert_eq!(PersonStatus::Safe.label(), "Safe");
    assert_eq!(PersonStatus::Away.label(), "Away");
    assert_eq!(PersonStatus::Moving.label(), "Moving");
}

#[test]
fn person_status_serializes_lowercase() {
    let raw = serde_json::to_string(&PersonStatus::Moving).unwrap();
    assert_eq!(raw, "\"moving\"");
}

// =============================================================
// TrackedPerson
// =============================================================

#[test]
fn battery_level_passes_through_in_range() {
    assert_eq!(person(0).battery_level(), 0);
    assert_eq!(person(64).battery_level(), 64);
    assert_eq!(person(100).battery_level(), 100);
}

#[test]
fn battery_level_clamps_above_hundred() {
    assert_eq!(person(140).battery_level(), 100);
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_as_str_matches_serde_name() {
    for category in [Category::Arrival, Category::Departure, Category::Alert, Category::Battery] {
        let raw = serde_json::to_string(&category).unwrap();
        assert_eq!(raw, format!("\"{}\"", category.as_str()));
    }
}

// =============================================================
// Notification
// =============================================================

#[test]
fn notification_optional_fields_default_when_missing() {
    let raw = r#"{
        "id": "9",
        "category": "alert",
        "title": "t",
        "message": "m",
        "time": "now",
        "read": false
    }"#;
    let n: Notification = serde_json::from_str(raw).unwrap();
    assert_eq!(n.category, Category::Alert);
    assert_eq!(n.date, None);
    assert_eq!(n.person_id, None);
    assert!(!n.read);
}

// =============================================================
// Accounts
// =============================================================

#[test]
fn role_and_status_labels() {
    assert_eq!(Role::Parent.label(), "Parent");
    assert_eq!(Role::Admin.label(), "Admin");
    assert_eq!(AccountStatus::Active.label(), "active");
    assert_eq!(AccountStatus::Inactive.label(), "inactive");
}
