//! Scripted replay of tab operations.
//!
//! A script is a YAML document with an `ops` list:
//!
//! ```yaml
//! ops:
//!   - op: create
//!     kind: terminal
//!     title: Server A
//!   - op: toggle_split
//!     id: 2
//!   - op: remove
//!     id: 2
//! ```

use crate::error::TeardownError;
use crate::pane::SplitChange;
use crate::session::FnHandle;
use crate::tab::{NewTab, RegistrySnapshot, TabId, TabKind, TabManager};
use anyhow::{Context, Result};
use par_deck_config::{BoundTarget, Config};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayOp {
    Create {
        kind: TabKind,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        target: Option<BoundTarget>,
    },
    Remove {
        id: TabId,
    },
    Activate {
        id: TabId,
    },
    ToggleSplit {
        id: TabId,
    },
    Reorder {
        from: usize,
        to: usize,
    },
    /// Release the reorder latch as a finished drag gesture would
    Settle,
    Rename {
        id: TabId,
        title: String,
    },
    UpdateTarget {
        target: BoundTarget,
    },
    Next,
    Previous,
}

#[derive(Debug, Deserialize)]
struct ReplayScript {
    ops: Vec<ReplayOp>,
}

/// Outcome of a replay
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub snapshot: RegistrySnapshot,
    /// Resource releases observed while the script ran
    pub releases: usize,
    /// Split toggles that were ignored (set full)
    pub ignored_split_toggles: usize,
    pub errors: Vec<String>,
}

pub fn parse_script(yaml: &str) -> Result<Vec<ReplayOp>> {
    let script: ReplayScript = serde_yaml_ng::from_str(yaml).context("parsing replay script")?;
    Ok(script.ops)
}

/// Apply `ops` to a fresh registry built from `config`.
///
/// Resource-owning tabs get a handle that counts its release.
pub fn replay(config: &Config, ops: &[ReplayOp]) -> ReplayReport {
    let releases = Arc::new(AtomicUsize::new(0));
    let mut mgr = TabManager::new(config);
    let mut ignored_split_toggles = 0;
    let mut errors = Vec::new();

    for op in ops {
        log::debug!("Replaying {:?}", op);
        match op {
            ReplayOp::Create {
                kind,
                title,
                target,
            } => {
                let mut request = NewTab::new(*kind);
                if let Some(title) = title {
                    request = request.title(title.clone());
                }
                if let Some(target) = target {
                    request = request.target(target.clone());
                }
                if kind.owns_resource() {
                    let releases = Arc::clone(&releases);
                    request = request.resource(FnHandle::new(move || {
                        releases.fetch_add(1, Ordering::SeqCst);
                        Ok::<(), TeardownError>(())
                    }));
                }
                mgr.create(request);
            }
            ReplayOp::Remove { id } => {
                if let Err(e) = mgr.remove(*id) {
                    errors.push(e.to_string());
                }
            }
            ReplayOp::Activate { id } => {
                mgr.activate(*id);
            }
            ReplayOp::ToggleSplit { id } => {
                if mgr.toggle_split(*id) == SplitChange::Ignored {
                    ignored_split_toggles += 1;
                }
            }
            ReplayOp::Reorder { from, to } => {
                mgr.reorder(*from, *to);
            }
            ReplayOp::Settle => mgr.settle_reorder(),
            ReplayOp::Rename { id, title } => {
                mgr.rename(*id, title);
            }
            ReplayOp::UpdateTarget { target } => {
                mgr.update_bound_target(target.clone());
            }
            ReplayOp::Next => mgr.activate_next(),
            ReplayOp::Previous => mgr.activate_previous(),
        }
    }

    let snapshot = mgr.snapshot();
    let report_releases = releases.load(Ordering::SeqCst);
    if let Err(e) = mgr.shutdown() {
        errors.push(e.to_string());
    }

    ReplayReport {
        snapshot,
        releases: report_releases,
        ignored_split_toggles,
        errors,
    }
}
