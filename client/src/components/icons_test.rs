use super::*;

const KINDS: [IconKind; 24] = [
    IconKind::Activity,
    IconKind::AlertTriangle,
    IconKind::Battery,
    IconKind::Bell,
    IconKind::Check,
    IconKind::Clock,
    IconKind::Dashboard,
    IconKind::Edit,
    IconKind::LogOut,
    IconKind::MapPin,
    IconKind::Menu,
    IconKind::More,
    IconKind::Navigation,
    IconKind::Plus,
    IconKind::Search,
    IconKind::Settings,
    IconKind::Shield,
    IconKind::Trash,
    IconKind::TrendingUp,
    IconKind::UserCheck,
    IconKind::UserX,
    IconKind::Users,
    IconKind::Wifi,
    IconKind::Close,
];

#[test]
fn every_icon_has_paths() {
    for kind in KINDS {
        let paths = icon_paths(kind);
        assert!(!paths.is_empty(), "{kind:?} has no paths");
        assert!(paths.iter().all(|d| d.starts_with('M')), "{kind:?} path must start with a move");
    }
}
