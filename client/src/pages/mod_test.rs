use super::*;

#[test]
fn seeded_unread_count_matches_feed() {
    assert_eq!(seeded_unread_count(), 3);
}
