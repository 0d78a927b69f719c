//! Icon identifiers shared by data, helpers, and the icon component.

/// A glyph drawn by `components::icons::Icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Activity,
    AlertTriangle,
    Battery,
    Bell,
    Check,
    Clock,
    Dashboard,
    Edit,
    LogOut,
    MapPin,
    Menu,
    More,
    Navigation,
    Plus,
    Search,
    Settings,
    Shield,
    Trash,
    TrendingUp,
    UserCheck,
    UserX,
    Users,
    Wifi,
    Close,
}
