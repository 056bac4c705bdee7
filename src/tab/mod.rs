//! Tab management for the multi-pane session client
//!
//! This module provides the core tab infrastructure including:
//! - `Tab`: a single work surface (terminal, file browser, stats, ...)
//! - `TabKind`: the closed set of surfaces and their per-kind policies
//! - `TabManager`: the registry that owns every tab, focus, and split state
//! - `TabId`: unique, never reused identifier for each tab

mod focus;
mod kind;
mod manager;
mod reorder;
mod snapshot;
pub mod title;

pub use focus::{Cycle, recompute_after_removal};
pub use kind::{TabKind, TitlePolicy};
pub use manager::{NewTab, TabManager};
pub use reorder::ReorderLatch;
pub use snapshot::{RegistrySnapshot, TabView};

use crate::session::ResourceHandle;
use par_deck_config::BoundTarget;
use std::fmt;

/// Unique identifier for a tab
pub type TabId = u64;

/// Id of the permanent home tab
pub const HOME_TAB_ID: TabId = 1;

/// A single addressable work surface.
///
/// Fields are private: only the registry mutates tabs.
pub struct Tab {
    id: TabId,
    kind: TabKind,
    title: String,
    bound_target: Option<BoundTarget>,
    /// Bumped on every in-place update so observers can detect changes
    revision: u64,
    resource: Option<Box<dyn ResourceHandle>>,
}

impl Tab {
    fn new(
        id: TabId,
        kind: TabKind,
        title: String,
        bound_target: Option<BoundTarget>,
        resource: Option<Box<dyn ResourceHandle>>,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            bound_target,
            revision: 0,
            resource,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn kind(&self) -> TabKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bound_target(&self) -> Option<&BoundTarget> {
        self.bound_target.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether a resource handle is still attached
    pub fn has_resource(&self) -> bool {
        self.resource.is_some()
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

impl fmt::Debug for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("bound_target", &self.bound_target)
            .field("revision", &self.revision)
            .field("has_resource", &self.resource.is_some())
            .finish()
    }
}
