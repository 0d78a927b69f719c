use super::*;

#[test]
fn children_have_unique_ids() {
    let kids = children();
    assert_eq!(kids.len(), 3);
    let mut ids: Vec<_> = kids.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn initial_selection_is_a_seeded_child() {
    assert!(children().iter().any(|c| c.id == INITIAL_SELECTION));
}

#[test]
fn panel_seed_has_two_unread_then_two_read() {
    let seed = panel_notifications();
    let read: Vec<bool> = seed.iter().map(|n| n.read).collect();
    assert_eq!(read, vec![false, false, true, true]);
}

#[test]
fn panel_seed_has_one_alert_and_one_battery() {
    let seed = panel_notifications();
    assert_eq!(seed.iter().filter(|n| n.category == Category::Alert).count(), 1);
    assert_eq!(seed.iter().filter(|n| n.category == Category::Battery).count(), 1);
}

#[test]
fn feed_seed_has_exactly_one_battery_record() {
    let seed = feed_notifications();
    assert_eq!(seed.len(), 6);
    let battery: Vec<_> = seed.iter().filter(|n| n.category == Category::Battery).collect();
    assert_eq!(battery.len(), 1);
    assert_eq!(battery[0].id, "4");
}

#[test]
fn feed_seed_is_dated() {
    assert!(feed_notifications().iter().all(|n| n.date.is_some()));
    assert!(panel_notifications().iter().all(|n| n.date.is_none()));
}

#[test]
fn every_notification_references_a_seeded_child() {
    let kids = children();
    for n in panel_notifications().iter().chain(feed_notifications().iter()) {
        let person_id = n.person_id.as_deref().unwrap();
        let child = kids.iter().find(|c| c.id == person_id).unwrap();
        assert!(n.title.starts_with(&child.name), "{} not about {}", n.title, child.name);
    }
}

#[test]
fn soccer_field_is_the_only_inactive_zone() {
    let inactive: Vec<_> = safe_zones().into_iter().filter(|z| !z.active).map(|z| z.name).collect();
    assert_eq!(inactive, vec!["Soccer Field".to_owned()]);
}

#[test]
fn one_admin_account() {
    let admins = user_accounts().into_iter().filter(|u| u.role == Role::Admin).count();
    assert_eq!(admins, 1);
}

#[test]
fn current_user_is_a_parent() {
    let user = current_user();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.role, Role::Parent);
}
