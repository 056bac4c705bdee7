//! Split-screen membership.
//!
//! Split mode is derived purely from the cardinality of the member set; there
//! is no separate "split enabled" flag to fall out of sync with it.

use crate::tab::TabId;
use par_deck_config::defaults::{MAX_SPLIT_CAPACITY, MIN_SPLIT_CAPACITY};

/// Outcome of a split-membership request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitChange {
    /// The tab joined the split
    Added,
    /// The tab left the split and at least two members remain, or a lone
    /// member was toggled or merged out
    Removed,
    /// The set was left with a single member, which was dropped too
    Collapsed,
    /// Nothing changed (set full, or the tab is unknown)
    Ignored,
}

/// Ordered, bounded set of tab ids shown side by side
#[derive(Debug, Clone)]
pub struct SplitSet {
    members: Vec<TabId>,
    capacity: usize,
}

impl SplitSet {
    /// Create an empty set. `capacity` is clamped to the supported range.
    pub fn new(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(MAX_SPLIT_CAPACITY),
            capacity: capacity.clamp(MIN_SPLIT_CAPACITY, MAX_SPLIT_CAPACITY),
        }
    }

    /// Add `id` if absent and there is room, remove it if present.
    ///
    /// A full set silently ignores additions.
    pub fn toggle(&mut self, id: TabId) -> SplitChange {
        if self.contains(id) {
            return self.remove_member(id);
        }
        if self.members.len() >= self.capacity {
            log::debug!(
                "Split set full ({} members), ignoring tab {}",
                self.members.len(),
                id
            );
            return SplitChange::Ignored;
        }
        self.members.push(id);
        SplitChange::Added
    }

    /// Forget a tab that left the registry.
    ///
    /// Whether or not `id` was a member, a set left with at most one member
    /// is cleared.
    pub fn on_tab_removed(&mut self, id: TabId) -> SplitChange {
        let was_member = self.contains(id);
        self.members.retain(|&m| m != id);
        if self.members.len() == 1 {
            log::debug!("Split collapsed after tab {} was removed", id);
            self.members.clear();
            return SplitChange::Collapsed;
        }
        if was_member {
            SplitChange::Removed
        } else {
            SplitChange::Ignored
        }
    }

    /// Newly created or merged tabs are never split members.
    ///
    /// Only `id` is dropped; the remaining members are left as they are.
    pub fn on_tab_merged_or_created(&mut self, id: TabId) -> SplitChange {
        if self.contains(id) {
            self.members.retain(|&m| m != id);
            SplitChange::Removed
        } else {
            SplitChange::Ignored
        }
    }

    // A single remaining pane is not a split, so dropping to one member
    // empties the set.
    fn remove_member(&mut self, id: TabId) -> SplitChange {
        self.members.retain(|&m| m != id);
        if self.members.len() == 1 {
            log::debug!("Split collapsed after tab {} left", id);
            self.members.clear();
            SplitChange::Collapsed
        } else {
            SplitChange::Removed
        }
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.members.contains(&id)
    }

    /// Members in the order they joined
    pub fn members(&self) -> &[TabId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether enough tabs are members to render side by side
    pub fn is_split(&self) -> bool {
        self.members.len() >= 2
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl Default for SplitSet {
    fn default() -> Self {
        Self::new(MAX_SPLIT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(ids: &[TabId]) -> SplitSet {
        let mut set = SplitSet::default();
        for &id in ids {
            assert_eq!(set.toggle(id), SplitChange::Added);
        }
        set
    }

    #[test]
    fn toggle_adds_in_order() {
        let set = set_with(&[5, 2, 9]);
        assert_eq!(set.members(), &[5, 2, 9]);
        assert!(set.is_split());
    }

    #[test]
    fn fifth_member_is_ignored() {
        let mut set = set_with(&[1, 2, 3, 4]);
        assert_eq!(set.toggle(5), SplitChange::Ignored);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(5));
    }

    #[test]
    fn toggling_out_of_pair_collapses() {
        let mut set = set_with(&[2, 3]);
        assert_eq!(set.toggle(2), SplitChange::Collapsed);
        assert!(set.is_empty());
    }

    #[test]
    fn toggling_out_of_triple_keeps_split() {
        let mut set = set_with(&[2, 3, 4]);
        assert_eq!(set.toggle(3), SplitChange::Removed);
        assert_eq!(set.members(), &[2, 4]);
    }

    #[test]
    fn lone_member_can_be_toggled_out() {
        let mut set = set_with(&[7]);
        assert!(!set.is_split());
        assert_eq!(set.toggle(7), SplitChange::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn removing_non_member_clears_lone_member() {
        let mut set = set_with(&[7]);
        assert_eq!(set.on_tab_removed(8), SplitChange::Collapsed);
        assert!(set.is_empty());
    }

    #[test]
    fn removing_non_member_keeps_pair() {
        let mut set = set_with(&[2, 3]);
        assert_eq!(set.on_tab_removed(8), SplitChange::Ignored);
        assert_eq!(set.members(), &[2, 3]);
    }

    #[test]
    fn removal_of_member_collapses_pair() {
        let mut set = set_with(&[2, 3]);
        assert_eq!(set.on_tab_removed(3), SplitChange::Collapsed);
        assert!(set.is_empty());
    }

    #[test]
    fn merged_tab_leaves_split() {
        let mut set = set_with(&[1, 2, 3]);
        assert_eq!(set.on_tab_merged_or_created(1), SplitChange::Removed);
        assert_eq!(set.members(), &[2, 3]);
        assert_eq!(set.on_tab_merged_or_created(42), SplitChange::Ignored);
    }

    #[test]
    fn merged_tab_out_of_pair_keeps_other_member() {
        let mut set = set_with(&[1, 2]);
        assert_eq!(set.on_tab_merged_or_created(1), SplitChange::Removed);
        assert_eq!(set.members(), &[2]);
        assert!(!set.is_split());

        let mut building = set_with(&[5]);
        assert_eq!(building.on_tab_merged_or_created(6), SplitChange::Ignored);
        assert_eq!(building.members(), &[5]);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(SplitSet::new(0).capacity(), MIN_SPLIT_CAPACITY);
        assert_eq!(SplitSet::new(100).capacity(), MAX_SPLIT_CAPACITY);

        let mut small = SplitSet::new(2);
        small.toggle(1);
        small.toggle(2);
        assert_eq!(small.toggle(3), SplitChange::Ignored);
    }
}
