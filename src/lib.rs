// Library exports for the par-deck session core.
//
// The view layer and connection layer consume `TabManager` and the resource
// handle types; everything else is plumbing for the development driver.

/// Application version (root crate version)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod error;
pub mod pane;
pub mod session;
pub mod tab;

pub use par_deck_config as config;

pub use error::{RegistryError, TeardownError};
pub use pane::{SplitChange, SplitSet};
pub use session::{FnHandle, ResourceHandle, ShutdownHandle, ShutdownSignal, shutdown_pair};
pub use tab::{HOME_TAB_ID, NewTab, Tab, TabId, TabKind, TabManager};
