//! Typed error types for par-deck.
//!
//! Registry bookkeeping never fails; the only errors surfaced come from
//! releasing the external resources tabs own.

use crate::tab::TabId;
use thiserror::Error;

/// Failure reported by a resource handle while releasing its resource.
#[derive(Debug, Error)]
pub enum TeardownError {
    /// The resource refused or failed to shut down.
    #[error("resource release failed: {0}")]
    Failed(String),

    /// The session behind the handle had already terminated.
    #[error("session already terminated")]
    SessionGone,
}

/// Top-level error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The tab was removed but releasing its resource failed.
    #[error("tab {tab_id} removed but its resource could not be released: {source}")]
    Teardown {
        /// Tab whose resource failed to release.
        tab_id: TabId,
        /// Error produced by the resource handle.
        #[source]
        source: TeardownError,
    },
}
