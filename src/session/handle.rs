//! Resource teardown hooks.
//!
//! A handle is bound to a tab at creation and consumed when the tab is
//! removed. `release` takes the handle by value, so a second release of the
//! same handle cannot be expressed.

use crate::error::TeardownError;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot capability that releases the external resource a tab owns.
///
/// Implementations must not block: long-running teardown (closing a remote
/// connection) is handed off and not awaited.
pub trait ResourceHandle: Send {
    fn release(self: Box<Self>) -> Result<(), TeardownError>;
}

/// Handle backed by a closure
pub struct FnHandle<F> {
    release: F,
}

impl<F> FnHandle<F>
where
    F: FnOnce() -> Result<(), TeardownError> + Send,
{
    pub fn new(release: F) -> Self {
        Self { release }
    }
}

impl<F> ResourceHandle for FnHandle<F>
where
    F: FnOnce() -> Result<(), TeardownError> + Send,
{
    fn release(self: Box<Self>) -> Result<(), TeardownError> {
        (self.release)()
    }
}

impl<F> fmt::Debug for FnHandle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandle").finish_non_exhaustive()
    }
}

/// Create a connected shutdown handle and signal.
///
/// The handle goes to the registry with the tab; the connection task keeps
/// the signal and stops when it fires.
pub fn shutdown_pair() -> (ShutdownHandle, ShutdownSignal) {
    let (tx, rx) = oneshot::channel();
    (ShutdownHandle { tx }, ShutdownSignal { rx })
}

/// Handle that notifies an async connection task to shut down
#[derive(Debug)]
pub struct ShutdownHandle {
    tx: oneshot::Sender<()>,
}

impl ResourceHandle for ShutdownHandle {
    fn release(self: Box<Self>) -> Result<(), TeardownError> {
        self.tx.send(()).map_err(|_| TeardownError::SessionGone)
    }
}

/// Receiving side of [`ShutdownHandle`]
#[derive(Debug)]
pub struct ShutdownSignal {
    rx: oneshot::Receiver<()>,
}

impl ShutdownSignal {
    /// Wait until the handle is released or dropped
    pub async fn wait(self) {
        let _ = self.rx.await;
    }

    /// Non-blocking check for a fired release
    pub fn is_triggered(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }
}
