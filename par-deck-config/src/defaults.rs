//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields so a partial config file still loads.

/// Largest number of tabs shown side by side in split-screen mode.
pub const MAX_SPLIT_CAPACITY: usize = 4;

/// Smallest capacity that still allows a meaningful split.
pub const MIN_SPLIT_CAPACITY: usize = 2;

/// Upper bound for the reorder settle window.
pub const MAX_REORDER_SETTLE_MS: u64 = 5000;

pub fn split_capacity() -> usize {
    MAX_SPLIT_CAPACITY
}

pub fn reorder_settle_ms() -> u64 {
    250
}

pub fn home_title() -> String {
    "Home".to_string()
}
