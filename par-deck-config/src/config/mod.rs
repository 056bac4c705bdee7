//! Session core configuration.
//!
//! `Config` is deliberately small: it only carries the knobs the tab registry
//! and its collaborators read at construction time. Persistence lives in
//! [`persistence`].

mod persistence;

use crate::defaults::{MAX_REORDER_SETTLE_MS, MAX_SPLIT_CAPACITY, MIN_SPLIT_CAPACITY};
use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the session core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of tabs shown side by side in split-screen mode (2..=4)
    #[serde(default = "crate::defaults::split_capacity")]
    pub split_capacity: usize,

    /// How long a reorder keeps duplicate reorder requests suppressed, in
    /// milliseconds. 0 disables suppression.
    #[serde(default = "crate::defaults::reorder_settle_ms")]
    pub reorder_settle_ms: u64,

    /// Title of the permanent home tab
    #[serde(default = "crate::defaults::home_title")]
    pub home_title: String,

    /// Debug log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split_capacity: crate::defaults::split_capacity(),
            reorder_settle_ms: crate::defaults::reorder_settle_ms(),
            home_title: crate::defaults::home_title(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Check field values that serde cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SPLIT_CAPACITY..=MAX_SPLIT_CAPACITY).contains(&self.split_capacity) {
            return Err(ConfigError::Validation(format!(
                "split_capacity must be between {MIN_SPLIT_CAPACITY} and {MAX_SPLIT_CAPACITY}, got {}",
                self.split_capacity
            )));
        }
        if self.reorder_settle_ms > MAX_REORDER_SETTLE_MS {
            return Err(ConfigError::Validation(format!(
                "reorder_settle_ms must be at most {MAX_REORDER_SETTLE_MS}, got {}",
                self.reorder_settle_ms
            )));
        }
        if self.home_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "home_title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Reorder settle window as a `Duration`
    pub fn reorder_settle(&self) -> Duration {
        Duration::from_millis(self.reorder_settle_ms)
    }
}
