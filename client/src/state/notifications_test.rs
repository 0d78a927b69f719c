use super::*;
use crate::data::seed;
use crate::data::types::Category;

fn note(id: &str, category: Category, read: bool) -> Notification {
    Notification {
        id: id.into(),
        category,
        title: format!("title {id}"),
        message: String::new(),
        time: "now".into(),
        date: None,
        person_id: None,
        read,
    }
}

fn ids(list: &[&Notification]) -> Vec<String> {
    list.iter().map(|n| n.id.clone()).collect()
}

fn mixed_store() -> NotificationStore {
    NotificationStore::new(vec![
        note("a", Category::Alert, false),
        note("b", Category::Arrival, true),
        note("c", Category::Alert, true),
        note("d", Category::Battery, false),
        note("e", Category::Departure, false),
        note("f", Category::Alert, false),
    ])
}

// =============================================================
// list
// =============================================================

#[test]
fn list_all_returns_every_record_in_seed_order() {
    let store = mixed_store();
    assert_eq!(ids(&store.list(CategoryFilter::All)), vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn list_by_category_is_an_ordered_subsequence_of_all() {
    let store = mixed_store();
    let all = ids(&store.list(CategoryFilter::All));
    for filter in CategoryFilter::ALL.into_iter().skip(1) {
        let narrowed = store.list(filter);
        assert!(narrowed.iter().all(|n| Some(n.category) == filter.category()));

        // Walk `all` once, consuming matches in order.
        let mut rest = all.iter();
        for id in ids(&narrowed) {
            assert!(rest.any(|a| *a == id), "{id} out of order for {filter}");
        }
    }
}

#[test]
fn list_is_repeatable() {
    let store = mixed_store();
    assert_eq!(store.list(CategoryFilter::Alert), store.list(CategoryFilter::Alert));
    assert_eq!(ids(&store.list(CategoryFilter::Alert)), vec!["a", "c", "f"]);
}

#[test]
fn list_on_empty_store_is_empty() {
    let store = NotificationStore::default();
    assert!(store.is_empty());
    assert!(store.list(CategoryFilter::All).is_empty());
    assert_eq!(store.unread_count(), 0);
}

// =============================================================
// unread_count / mark_all_read
// =============================================================

#[test]
fn unread_count_counts_unread_only() {
    assert_eq!(mixed_store().unread_count(), 4);
}

#[test]
fn mark_all_read_zeroes_unread_count() {
    let mut store = mixed_store();
    store.mark_all_read();
    assert_eq!(store.unread_count(), 0);
    assert!(store.list(CategoryFilter::All).iter().all(|n| n.read));
}

#[test]
fn mark_all_read_is_idempotent() {
    let mut once = mixed_store();
    once.mark_all_read();
    let mut twice = mixed_store();
    twice.mark_all_read();
    twice.mark_all_read();
    assert_eq!(once, twice);
}

#[test]
fn mark_all_read_keeps_order_and_length() {
    let mut store = mixed_store();
    store.mark_all_read();
    assert_eq!(store.len(), 6);
    assert_eq!(ids(&store.list(CategoryFilter::All)), vec!["a", "b", "c", "d", "e", "f"]);
}

// =============================================================
// mark_read
// =============================================================

#[test]
fn mark_read_flips_only_the_matching_record() {
    let mut store = mixed_store();
    store.mark_read("d");
    assert_eq!(store.unread_count(), 3);
    let battery = store.list(CategoryFilter::Battery);
    assert!(battery[0].read);
    assert!(!store.list(CategoryFilter::Departure)[0].read);
}

#[test]
fn mark_read_unknown_id_is_a_noop() {
    let mut store = mixed_store();
    let before = store.clone();
    store.mark_read("missing");
    assert_eq!(store.unread_count(), 4);
    assert_eq!(store, before);
}

#[test]
fn mark_read_on_read_record_stays_read() {
    let mut store = mixed_store();
    store.mark_read("b");
    store.mark_read("b");
    assert!(store.list(CategoryFilter::Arrival)[0].read);
    assert_eq!(store.unread_count(), 4);
}

// =============================================================
// for_person
// =============================================================

#[test]
fn for_person_uses_foreign_key() {
    let store = NotificationStore::new(seed::panel_notifications());
    let lucas = store.for_person("2");
    assert_eq!(ids(&lucas), vec!["2", "4"]);
    assert!(store.for_person("nobody").is_empty());
}

// =============================================================
// Seeded scenario
// =============================================================

#[test]
fn panel_seed_mark_all_read_scenario() {
    let mut store = NotificationStore::new(seed::panel_notifications());
    assert_eq!(store.unread_count(), 2);

    store.mark_all_read();
    assert_eq!(store.unread_count(), 0);

    let alerts = store.list(CategoryFilter::Alert);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].category, Category::Alert);
    assert!(alerts[0].read);
}

#[test]
fn independent_instances_do_not_share_reads() {
    let mut panel = NotificationStore::new(seed::panel_notifications());
    let page = NotificationStore::new(seed::panel_notifications());
    panel.mark_all_read();
    assert_eq!(panel.unread_count(), 0);
    assert_eq!(page.unread_count(), 2);
}
