//! Bound target metadata.
//!
//! A bound target is the configuration identity a tab addresses, typically a
//! remote host. Several tabs (a terminal, a file browser, a stats view) may
//! point at the same target; editing the target propagates to all of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Port assumed when a target does not name one.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Stable identity of a bound target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Allocate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Connection metadata for a remote host that tabs can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundTarget {
    pub id: TargetId,
    /// User-chosen label; preferred over the connection string when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl BoundTarget {
    /// Create a target with a freshly generated id
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_id(TargetId::generate(), host)
    }

    pub fn with_id(id: TargetId, host: impl Into<String>) -> Self {
        Self {
            id,
            name: None,
            host: host.into(),
            user: None,
            port: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Human-readable label used as the title of tabs bound to this target.
    ///
    /// Prefers the explicit name; otherwise renders `user@host[:port]`,
    /// omitting the port when it is the SSH default.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim)
            && !name.is_empty()
        {
            return name.to_string();
        }

        let mut label = match self.user.as_deref() {
            Some(user) if !user.is_empty() => format!("{user}@{}", self.host),
            _ => self.host.clone(),
        };
        if let Some(port) = self.port
            && port != DEFAULT_SSH_PORT
        {
            label.push_str(&format!(":{port}"));
        }
        label
    }
}
