use super::*;

#[test]
fn member_list_joins_names() {
    let zones = seed::safe_zones();
    assert_eq!(member_list(&zones[0]), "Emma, Lucas, Sophie");
    assert_eq!(member_list(&zones[1]), "Emma");
}

#[test]
fn member_list_placeholder_when_empty() {
    let mut zone = seed::safe_zones().remove(0);
    zone.members.clear();
    assert_eq!(member_list(&zone), "No members");
}
