//! Small display-string helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Uppercase initials of the first two words, e.g. `"Jane Doe"` -> `"JD"`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Badge text for a count; values above nine collapse to `"9+"`.
#[must_use]
pub fn badge_count(count: usize) -> String {
    if count > 9 { "9+".to_owned() } else { count.to_string() }
}

/// Clock and day label joined for the notifications feed.
#[must_use]
pub fn time_with_date(time: &str, date: Option<&str>) -> String {
    match date {
        Some(date) => format!("{time} \u{b7} {date}"),
        None => time.to_owned(),
    }
}
