use super::*;

fn names(accounts: &[UserAccount]) -> Vec<&str> {
    accounts.iter().map(|a| a.name.as_str()).collect()
}

#[test]
fn blank_query_keeps_all_accounts() {
    let all = seed::user_accounts();
    assert_eq!(filter_accounts(&all, "").len(), 5);
    assert_eq!(filter_accounts(&all, "   ").len(), 5);
}

#[test]
fn query_matches_name_case_insensitively() {
    let all = seed::user_accounts();
    assert_eq!(names(&filter_accounts(&all, "JOHN")), vec!["John Smith"]);
}

#[test]
fn query_matches_email() {
    let all = seed::user_accounts();
    assert_eq!(names(&filter_accounts(&all, "safetrack.com")), vec!["Admin User"]);
}

#[test]
fn query_preserves_table_order() {
    let all = seed::user_accounts();
    assert_eq!(names(&filter_accounts(&all, "example.com")), vec![
        "Jane Doe",
        "John Smith",
        "Sarah Wilson",
        "Mike Brown"
    ]);
}

#[test]
fn unmatched_query_is_empty() {
    assert!(filter_accounts(&seed::user_accounts(), "zzz").is_empty());
}
