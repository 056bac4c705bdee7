//! Read-only, serializable view of the registry.

use super::{Tab, TabId, TabKind};
use par_deck_config::BoundTarget;
use serde::{Deserialize, Serialize};

/// One tab as seen by the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabView {
    pub id: TabId,
    pub kind: TabKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<BoundTarget>,
    pub revision: u64,
    pub has_resource: bool,
}

impl From<&Tab> for TabView {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id,
            kind: tab.kind,
            title: tab.title.clone(),
            target: tab.bound_target.clone(),
            revision: tab.revision,
            has_resource: tab.resource.is_some(),
        }
    }
}

/// Registry state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Tabs in display order
    pub tabs: Vec<TabView>,
    pub active: TabId,
    /// Split members in join order
    pub split: Vec<TabId>,
}
