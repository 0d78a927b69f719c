//! Static seed data for every page.
//!
//! Each call returns fresh owned records so independent state instances
//! never share storage.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use super::types::{
    AccountStatus, Category, CurrentUser, Notification, PersonStatus, Role, SafeZone, Stat, StatTone, TrackedPerson,
    UserAccount,
};
use crate::util::icon::IconKind;

/// Id of the child focused when the dashboard first renders.
pub const INITIAL_SELECTION: &str = "1";

const EMMA: &str = "1";
const LUCAS: &str = "2";
const SOPHIE: &str = "3";

fn avatar(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=100&h=100&fit=crop&crop=face")
}

/// Tracked children shown on the dashboard map and roster.
#[must_use]
pub fn children() -> Vec<TrackedPerson> {
    vec![
        TrackedPerson {
            id: EMMA.into(),
            name: "Emma".into(),
            avatar_url: avatar("1595454223600-91e87e1f5ab0"),
            status: PersonStatus::Safe,
            location: "Lincoln Elementary School".into(),
            battery: 82,
            last_seen: "Just now".into(),
            lat: 40.7128,
            lng: -74.006,
        },
        TrackedPerson {
            id: LUCAS.into(),
            name: "Lucas".into(),
            avatar_url: avatar("1545696968-1a5245650b36"),
            status: PersonStatus::Moving,
            location: "Maple Avenue".into(),
            battery: 15,
            last_seen: "1 min ago".into(),
            lat: 40.7148,
            lng: -74.013,
        },
        TrackedPerson {
            id: SOPHIE.into(),
            name: "Sophie".into(),
            avatar_url: avatar("1503454537195-1dcabb73ffb9"),
            status: PersonStatus::Away,
            location: "342 Oak Street".into(),
            battery: 64,
            last_seen: "5 min ago".into(),
            lat: 40.7108,
            lng: -74.001,
        },
    ]
}

/// An unread, undated notification about `person_id`.
fn notification(id: &str, category: Category, person_id: &str, title: &str, message: &str, time: &str) -> Notification {
    Notification {
        id: id.into(),
        category,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        date: None,
        person_id: Some(person_id.into()),
        read: false,
    }
}

fn dated(date: &str, read: bool, notification: Notification) -> Notification {
    Notification { date: Some(date.into()), read, ..notification }
}

fn read(notification: Notification) -> Notification {
    Notification { read: true, ..notification }
}

/// Recent notifications for the dashboard slide-over panel.
#[must_use]
pub fn panel_notifications() -> Vec<Notification> {
    vec![
        notification(
            "1",
            Category::Arrival,
            EMMA,
            "Emma arrived at School",
            "Entered safe zone at 8:02 AM",
            "2 min ago",
        ),
        notification(
            "2",
            Category::Departure,
            LUCAS,
            "Lucas left Home",
            "Departed safe zone at 7:45 AM",
            "19 min ago",
        ),
        read(notification(
            "3",
            Category::Alert,
            SOPHIE,
            "Sophie outside safe zones",
            "Currently at 342 Oak Street",
            "35 min ago",
        )),
        read(notification(
            "4",
            Category::Battery,
            LUCAS,
            "Lucas's battery low",
            "Battery at 15% \u{2014} remind to charge",
            "1 hr ago",
        )),
    ]
}

/// Full history for the notifications page, grouped by day label.
#[must_use]
pub fn feed_notifications() -> Vec<Notification> {
    vec![
        dated(
            "Today",
            false,
            notification(
                "1",
                Category::Arrival,
                EMMA,
                "Emma arrived at School",
                "Entered Lincoln Elementary safe zone",
                "8:02 AM",
            ),
        ),
        dated(
            "Today",
            false,
            notification(
                "2",
                Category::Departure,
                LUCAS,
                "Lucas left Home",
                "Departed home safe zone heading east",
                "7:45 AM",
            ),
        ),
        dated(
            "Today",
            false,
            notification(
                "3",
                Category::Alert,
                SOPHIE,
                "Sophie outside safe zones",
                "Currently at 342 Oak Street \u{2014} no safe zone nearby",
                "7:30 AM",
            ),
        ),
        dated(
            "Today",
            true,
            notification(
                "4",
                Category::Battery,
                LUCAS,
                "Lucas's battery low",
                "Battery at 15% \u{2014} remind to charge device",
                "7:15 AM",
            ),
        ),
        dated(
            "Yesterday",
            true,
            notification(
                "5",
                Category::Arrival,
                SOPHIE,
                "Sophie arrived at Home",
                "Entered home safe zone",
                "6:30 PM",
            ),
        ),
        dated(
            "Yesterday",
            true,
            notification(
                "6",
                Category::Departure,
                EMMA,
                "Emma left School",
                "Departed Lincoln Elementary safe zone",
                "3:15 PM",
            ),
        ),
    ]
}

fn zone(id: &str, name: &str, address: &str, radius: &str, members: &[&str], active: bool) -> SafeZone {
    SafeZone {
        id: id.into(),
        name: name.into(),
        address: address.into(),
        radius: radius.into(),
        members: members.iter().map(|m| (*m).to_owned()).collect(),
        active,
    }
}

/// Configured safe zones.
#[must_use]
pub fn safe_zones() -> Vec<SafeZone> {
    vec![
        zone("1", "Home", "123 Main Street", "200m", &["Emma", "Lucas", "Sophie"], true),
        zone("2", "Lincoln Elementary", "456 School Road", "150m", &["Emma"], true),
        zone("3", "Soccer Field", "789 Park Ave", "100m", &["Lucas"], false),
        zone("4", "Grandma's House", "321 Oak Lane", "150m", &["Emma", "Sophie"], true),
    ]
}

fn account(id: &str, name: &str, email: &str, role: Role, children: u32, status: AccountStatus, joined: &str) -> UserAccount {
    UserAccount {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        role,
        children,
        status,
        joined: joined.into(),
    }
}

/// Accounts listed in the admin user table.
#[must_use]
pub fn user_accounts() -> Vec<UserAccount> {
    vec![
        account("1", "Jane Doe", "jane@example.com", Role::Parent, 3, AccountStatus::Active, "Jan 2024"),
        account("2", "John Smith", "john@example.com", Role::Parent, 2, AccountStatus::Active, "Feb 2024"),
        account("3", "Sarah Wilson", "sarah@example.com", Role::Parent, 1, AccountStatus::Active, "Mar 2024"),
        account("4", "Mike Brown", "mike@example.com", Role::Parent, 2, AccountStatus::Inactive, "Jan 2024"),
        account("5", "Admin User", "admin@safetrack.com", Role::Admin, 0, AccountStatus::Active, "Dec 2023"),
    ]
}

/// Platform-wide counters for the admin page.
#[must_use]
pub fn admin_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Total Users", value: "156".into(), icon: IconKind::Users, tone: StatTone::Accent },
        Stat { label: "Active Trackers", value: "312".into(), icon: IconKind::Activity, tone: StatTone::Safe },
        Stat { label: "Safe Zones", value: "487".into(), icon: IconKind::Shield, tone: StatTone::Warning },
    ]
}

/// The signed-in account.
#[must_use]
pub fn current_user() -> CurrentUser {
    CurrentUser { name: "Jane Doe".into(), email: "jane@example.com".into(), role: Role::Parent }
}
