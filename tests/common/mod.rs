//! Shared integration test helpers for par-deck.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{ReleaseCounter, manager_without_latch};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use par_deck::config::Config;
use par_deck::{FnHandle, NewTab, ResourceHandle, TabId, TabKind, TabManager, TeardownError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry with the reorder latch disabled so back-to-back reorders apply
pub fn manager_without_latch() -> TabManager {
    let config = Config {
        reorder_settle_ms: 0,
        ..Config::default()
    };
    TabManager::new(&config)
}

/// Records how often each labelled handle was released
#[derive(Clone, Default)]
pub struct ReleaseCounter {
    counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl ReleaseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that bumps the count for `label` when released
    pub fn handle(&self, label: &str) -> impl ResourceHandle + use<> {
        let counts = Arc::clone(&self.counts);
        let label = label.to_string();
        FnHandle::new(move || {
            *counts.lock().entry(label).or_default() += 1;
            Ok::<(), TeardownError>(())
        })
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.lock().get(label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.lock().values().sum()
    }
}

/// Open a terminal tab owning a counted resource labelled by its title
pub fn open_terminal(mgr: &mut TabManager, counter: &ReleaseCounter, title: &str) -> TabId {
    mgr.create(
        NewTab::new(TabKind::Terminal)
            .title(title)
            .resource(counter.handle(title)),
    )
}

/// Tiny deterministic xorshift generator for operation sequences
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n.max(1)
    }
}
