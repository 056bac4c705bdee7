//! The closed set of tab kinds and the per-kind policies the registry
//! consults at every decision point.

use serde::{Deserialize, Serialize};

/// What a tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabKind {
    Home,
    Terminal,
    RemoteStats,
    FileBrowser,
    Tunnel,
    Container,
    Admin,
    SessionManager,
    UserProfile,
    TopologyView,
}

/// How a kind's display title is chosen and maintained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePolicy {
    /// Set once at creation; rename requests are refused
    Fixed,
    /// Must not collide with another tab of the same kind
    Unique,
    /// Taken verbatim, duplicates allowed
    Free,
}

impl TabKind {
    /// Kinds that represent a single global surface. Creating a second one
    /// updates the existing tab in place instead of allocating a new id.
    pub fn is_singleton(self) -> bool {
        match self {
            TabKind::Home | TabKind::Admin | TabKind::SessionManager => true,
            TabKind::Terminal
            | TabKind::RemoteStats
            | TabKind::FileBrowser
            | TabKind::Tunnel
            | TabKind::Container
            | TabKind::UserProfile
            | TabKind::TopologyView => false,
        }
    }

    pub fn title_policy(self) -> TitlePolicy {
        match self {
            TabKind::Home | TabKind::Admin | TabKind::SessionManager => TitlePolicy::Fixed,
            TabKind::Terminal
            | TabKind::RemoteStats
            | TabKind::FileBrowser
            | TabKind::Tunnel
            | TabKind::Container => TitlePolicy::Unique,
            TabKind::UserProfile | TabKind::TopologyView => TitlePolicy::Free,
        }
    }

    /// Whether tabs of this kind hold a live external resource (a remote
    /// session, a forwarded port, a container API stream) that must be
    /// released when the tab goes away.
    pub fn owns_resource(self) -> bool {
        match self {
            TabKind::Terminal
            | TabKind::RemoteStats
            | TabKind::FileBrowser
            | TabKind::Tunnel
            | TabKind::Container => true,
            TabKind::Home
            | TabKind::Admin
            | TabKind::SessionManager
            | TabKind::UserProfile
            | TabKind::TopologyView => false,
        }
    }

    /// Whether the title follows the bound target's display name.
    ///
    /// Session-manager tabs can be bound to a target too, but they show a
    /// management view and keep their own title.
    pub fn derives_title_from_target(self) -> bool {
        match self {
            TabKind::Terminal
            | TabKind::RemoteStats
            | TabKind::FileBrowser
            | TabKind::Tunnel
            | TabKind::Container => true,
            TabKind::Home
            | TabKind::Admin
            | TabKind::SessionManager
            | TabKind::UserProfile
            | TabKind::TopologyView => false,
        }
    }

    /// Title used when neither the caller nor a bound target supplies one
    pub fn default_title(self) -> &'static str {
        match self {
            TabKind::Home => "Home",
            TabKind::Terminal => "Terminal",
            TabKind::RemoteStats => "Stats",
            TabKind::FileBrowser => "Files",
            TabKind::Tunnel => "Tunnel",
            TabKind::Container => "Containers",
            TabKind::Admin => "Admin",
            TabKind::SessionManager => "Sessions",
            TabKind::UserProfile => "Profile",
            TabKind::TopologyView => "Topology",
        }
    }
}
