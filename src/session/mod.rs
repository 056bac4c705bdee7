//! Resources owned by tabs
//!
//! Tabs that front a live remote session carry a [`ResourceHandle`] which the
//! registry releases exactly once when the tab is removed.

mod handle;

pub use handle::{FnHandle, ResourceHandle, ShutdownHandle, ShutdownSignal, shutdown_pair};
