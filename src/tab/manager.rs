//! Tab registry: the single owner of every tab, the active tab, and split
//! membership.

use super::focus::{self, Cycle};
use super::reorder::ReorderLatch;
use super::title::uniquify;
use super::{HOME_TAB_ID, RegistrySnapshot, Tab, TabId, TabKind, TabView, TitlePolicy};
use crate::error::RegistryError;
use crate::pane::{SplitChange, SplitSet};
use crate::session::ResourceHandle;
use par_deck_config::{BoundTarget, Config};
use std::time::Instant;

/// Request to open a tab
pub struct NewTab {
    kind: TabKind,
    title: Option<String>,
    target: Option<BoundTarget>,
    resource: Option<Box<dyn ResourceHandle>>,
}

impl NewTab {
    pub fn new(kind: TabKind) -> Self {
        Self {
            kind,
            title: None,
            target: None,
            resource: None,
        }
    }

    /// Desired title; it may still be adjusted to stay unique
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn target(mut self, target: BoundTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach the teardown hook for the live resource this tab will own
    pub fn resource(mut self, handle: impl ResourceHandle + 'static) -> Self {
        self.resource = Some(Box::new(handle));
        self
    }
}

/// Manages every tab of the client
pub struct TabManager {
    /// All tabs, in display order
    tabs: Vec<Tab>,
    /// Currently active tab ID; always refers to an existing tab
    active_tab_id: TabId,
    /// Counter for generating unique tab IDs
    next_tab_id: TabId,
    split: SplitSet,
    reorder_latch: ReorderLatch,
}

impl TabManager {
    /// Create a registry holding only the home tab
    pub fn new(config: &Config) -> Self {
        let home = Tab::new(
            HOME_TAB_ID,
            TabKind::Home,
            config.home_title.clone(),
            None,
            None,
        );
        Self {
            tabs: vec![home],
            active_tab_id: HOME_TAB_ID,
            next_tab_id: HOME_TAB_ID + 1,
            split: SplitSet::new(config.split_capacity),
            reorder_latch: ReorderLatch::new(config.reorder_settle()),
        }
    }

    /// Open a tab and focus it, returning its ID.
    ///
    /// Singleton kinds (home, admin, session manager) are merged into the
    /// existing tab of that kind when there is one: its target is replaced,
    /// its revision bumped, and its ID returned.
    pub fn create(&mut self, request: NewTab) -> TabId {
        let NewTab {
            kind,
            title,
            target,
            resource,
        } = request;

        let resource = match resource {
            Some(handle) if !kind.owns_resource() => {
                log::warn!("{:?} tabs do not own resources, releasing handle", kind);
                if let Err(e) = handle.release() {
                    log::warn!("Releasing unbound handle failed: {}", e);
                }
                None
            }
            other => other,
        };

        if kind.is_singleton()
            && let Some(existing) = self.tabs.iter_mut().find(|t| t.kind == kind)
        {
            existing.bound_target = target;
            existing.touch();
            let id = existing.id;
            self.split.on_tab_merged_or_created(id);
            self.active_tab_id = id;
            log::info!("Merged {:?} request into existing tab {}", kind, id);
            return id;
        }

        let title = self.resolve_title(kind, title.as_deref(), target.as_ref(), None);

        let id = self.next_tab_id;
        self.next_tab_id += 1;

        self.tabs.push(Tab::new(id, kind, title, target, resource));
        self.split.on_tab_merged_or_created(id);

        // Always switch to the new tab
        self.active_tab_id = id;

        log::info!("Created {:?} tab {} (total: {})", kind, id, self.tabs.len());

        id
    }

    /// Close a tab by ID.
    ///
    /// Unknown IDs and the home tab are ignored. The tab record is gone, split
    /// membership and focus are updated before its resource is released, so
    /// a repeated request for the same ID finds nothing to release.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Teardown`] when the resource handle fails. The
    /// registry state is already updated at that point.
    pub fn remove(&mut self, id: TabId) -> Result<(), RegistryError> {
        if id == HOME_TAB_ID {
            log::debug!("Ignoring request to close the home tab");
            return Ok(());
        }
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            log::debug!("Ignoring request to close unknown tab {}", id);
            return Ok(());
        };

        log::info!("Closing tab {} (index {})", id, idx);
        let mut tab = self.tabs.remove(idx);

        self.split.on_tab_removed(id);

        let remaining: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();
        let previous = self.active_tab_id;
        self.active_tab_id =
            focus::recompute_after_removal(id, previous, self.split.members(), &remaining);
        if self.active_tab_id != previous {
            log::debug!("Focus moved from tab {} to {}", previous, self.active_tab_id);
        }

        match tab.resource.take() {
            Some(handle) => handle.release().map_err(|source| {
                log::error!("Failed to release resources of tab {}: {}", id, source);
                RegistryError::Teardown { tab_id: id, source }
            }),
            None => Ok(()),
        }
    }

    /// Switch to a tab by ID; unknown IDs are ignored.
    ///
    /// Returns true if the tab exists.
    pub fn activate(&mut self, id: TabId) -> bool {
        if self.contains(id) {
            self.active_tab_id = id;
            log::debug!("Switched to tab {}", id);
            true
        } else {
            log::debug!("Ignoring switch to unknown tab {}", id);
            false
        }
    }

    /// Switch to the next tab (wraps around)
    pub fn activate_next(&mut self) {
        self.cycle_focus(Cycle::Next);
    }

    /// Switch to the previous tab (wraps around)
    pub fn activate_previous(&mut self) {
        self.cycle_focus(Cycle::Previous);
    }

    fn cycle_focus(&mut self, direction: Cycle) {
        let order: Vec<TabId> = self.tabs.iter().map(|t| t.id).collect();
        if let Some(id) = focus::cycle(&order, self.active_tab_id, direction) {
            self.activate(id);
        }
    }

    /// Add the tab to split-screen, or take it out if it is already there
    pub fn toggle_split(&mut self, id: TabId) -> SplitChange {
        if !self.contains(id) {
            log::debug!("Ignoring split toggle for unknown tab {}", id);
            return SplitChange::Ignored;
        }
        let change = self.split.toggle(id);
        log::debug!(
            "Split toggle for tab {}: {:?} (members: {:?})",
            id,
            change,
            self.split.members()
        );
        change
    }

    /// Move the tab at `from` to `to` (used by drag-and-drop reordering).
    ///
    /// Both indices are clamped to the tab list. Requests arriving while a
    /// previous reorder has not settled are dropped.
    /// Returns true if a tab was actually moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let now = Instant::now();
        if self.reorder_latch.is_engaged(now) {
            log::debug!("Dropping reorder {} -> {}: previous move not settled", from, to);
            return false;
        }

        let last = self.tabs.len().saturating_sub(1);
        let (from, to) = (from.min(last), to.min(last));
        if from == to {
            return false;
        }

        let tab = self.tabs.remove(from);
        let id = tab.id;
        self.tabs.insert(to, tab);
        self.reorder_latch.engage(now);
        log::debug!("Moved tab {} from index {} to {}", id, from, to);
        true
    }

    /// Mark the current reorder gesture as finished
    pub fn settle_reorder(&mut self) {
        self.reorder_latch.release();
    }

    /// Give a tab a new title.
    ///
    /// Fixed-title kinds refuse. A blank title resets to the derived one.
    /// Returns true if the title was applied (it may
    /// have been adjusted to stay unique).
    pub fn rename(&mut self, id: TabId, title: &str) -> bool {
        let Some((kind, target)) = self
            .get_tab(id)
            .map(|t| (t.kind, t.bound_target.clone()))
        else {
            return false;
        };
        if kind.title_policy() == TitlePolicy::Fixed {
            log::debug!("{:?} tab {} has a fixed title", kind, id);
            return false;
        }

        let trimmed = title.trim();
        let desired = (!trimmed.is_empty()).then_some(trimmed);
        let title = self.resolve_title(kind, desired, target.as_ref(), Some(id));
        match self.get_tab_mut(id) {
            Some(tab) => {
                tab.title = title;
                tab.touch();
                true
            }
            None => false,
        }
    }

    /// Push new metadata to every tab bound to `target.id`.
    ///
    /// Tabs whose kind derives its title from the target get a fresh,
    /// uniquified title; the rest keep theirs. Returns how many tabs changed.
    pub fn update_bound_target(&mut self, target: BoundTarget) -> usize {
        let bound: Vec<(TabId, TabKind)> = self
            .tabs
            .iter()
            .filter(|t| t.bound_target.as_ref().is_some_and(|b| b.id == target.id))
            .map(|t| (t.id, t.kind))
            .collect();

        for &(id, kind) in &bound {
            let title = kind
                .derives_title_from_target()
                .then(|| self.resolve_title(kind, None, Some(&target), Some(id)));
            if let Some(tab) = self.get_tab_mut(id) {
                tab.bound_target = Some(target.clone());
                if let Some(title) = title {
                    tab.title = title;
                }
                tab.touch();
            }
        }

        if !bound.is_empty() {
            log::info!("Updated target {} on {} tab(s)", target.id, bound.len());
        }
        bound.len()
    }

    // Desired title, else the target's name for kinds that follow it, else
    // the kind default; uniquified among same-kind tabs other than `exclude`.
    fn resolve_title(
        &self,
        kind: TabKind,
        desired: Option<&str>,
        target: Option<&BoundTarget>,
        exclude: Option<TabId>,
    ) -> String {
        let candidate = desired
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| {
                target
                    .filter(|_| kind.derives_title_from_target())
                    .map(BoundTarget::display_name)
            })
            .unwrap_or_else(|| kind.default_title().to_string());

        match kind.title_policy() {
            TitlePolicy::Unique => uniquify(
                &candidate,
                self.tabs
                    .iter()
                    .filter(|t| t.kind == kind && Some(t.id) != exclude)
                    .map(|t| t.title.as_str()),
            ),
            TitlePolicy::Fixed | TitlePolicy::Free => candidate,
        }
    }

    /// Get a tab by ID
    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn get_tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    /// Get all tabs as a slice, in display order
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get the number of tabs
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Get the active tab ID
    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// Get a reference to the active tab
    pub fn active_tab(&self) -> Option<&Tab> {
        self.get_tab(self.active_tab_id)
    }

    /// Get index of active tab (0-based)
    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == self.active_tab_id)
    }

    /// Split members in join order
    pub fn split_members(&self) -> &[TabId] {
        self.split.members()
    }

    /// Whether at least two tabs are shown side by side
    pub fn is_split(&self) -> bool {
        self.split.is_split()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            tabs: self.tabs.iter().map(TabView::from).collect(),
            active: self.active_tab_id,
            split: self.split.members().to_vec(),
        }
    }

    /// Release every remaining resource handle.
    ///
    /// All handles are released even if some fail; each failure is logged and
    /// the first one is returned.
    pub fn shutdown(mut self) -> Result<(), RegistryError> {
        self.release_all()
    }

    fn release_all(&mut self) -> Result<(), RegistryError> {
        let mut first_error = None;
        for tab in &mut self.tabs {
            let Some(handle) = tab.resource.take() else {
                continue;
            };
            if let Err(source) = handle.release() {
                log::error!("Failed to release resources of tab {}: {}", tab.id, source);
                first_error.get_or_insert(RegistryError::Teardown {
                    tab_id: tab.id,
                    source,
                });
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Drop for TabManager {
    fn drop(&mut self) {
        // Errors are already logged by release_all
        let _ = self.release_all();
    }
}
