//! Active-tab selection after structural changes.

use super::{HOME_TAB_ID, TabId};

/// Pick the tab to focus after `removed` has left the registry.
///
/// `split_members` must already reflect the split coordinator's cleanup for
/// the removal and `remaining` is the registry order without `removed`.
///
/// Priority: keep focus if another tab was removed, then stay inside the
/// split view, then fall back to the first tab, then to home.
pub fn recompute_after_removal(
    removed: TabId,
    previous_active: TabId,
    split_members: &[TabId],
    remaining: &[TabId],
) -> TabId {
    if removed != previous_active {
        return previous_active;
    }
    split_members
        .first()
        .or_else(|| remaining.first())
        .copied()
        .unwrap_or(HOME_TAB_ID)
}

/// Direction for cycling focus through the tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Next,
    Previous,
}

/// Neighbour of `current` in `order`, wrapping at both ends.
///
/// Returns `None` when there is nothing to cycle to.
pub fn cycle(order: &[TabId], current: TabId, direction: Cycle) -> Option<TabId> {
    if order.len() <= 1 {
        return None;
    }
    let idx = order.iter().position(|&id| id == current).unwrap_or(0);
    let target = match direction {
        Cycle::Next => (idx + 1) % order.len(),
        Cycle::Previous if idx == 0 => order.len() - 1,
        Cycle::Previous => idx - 1,
    };
    Some(order[target])
}
