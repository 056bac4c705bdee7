//! Configuration system for par-deck.
//!
//! This crate provides configuration loading, saving, and default values
//! for the session core. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - Default value functions used by serde
//! - Bound target (remote host) metadata shared by tabs

pub mod config;
pub mod defaults;
pub mod error;
pub mod target;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use target::{BoundTarget, TargetId};
pub use types::LogLevel;
