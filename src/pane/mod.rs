//! Split-screen coordination
//!
//! Tabs can be shown side by side. This module owns which tabs take part:
//! - `SplitSet`: bounded membership (at most four tabs)
//! - `SplitChange`: what a membership request actually did

mod split;

pub use split::{SplitChange, SplitSet};
