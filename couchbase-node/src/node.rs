//! Node state types.

use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Identifier the Management REST API uses for the local node.
pub const SELF_NODE: &str = "self";

/// A node as addressed in REST paths: `self` or a hostname/IP.
///
/// The value is interpolated verbatim, so both forms take the same code path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        Ok(Self(id))
    }

    /// The node the agent is running on.
    pub fn local() -> Self {
        Self(SELF_NODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `/nodes/<id>`
    pub fn info_path(&self) -> String {
        format!("/nodes/{}", self.0)
    }

    /// `/nodes/<id>/controller/settings`
    pub fn settings_path(&self) -> String {
        format!("/nodes/{}/controller/settings", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Snapshot of a node as reported by the cluster. Never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentNodeState {
    pub name: NodeId,
    pub database_path: String,
}

/// Desired configuration of a node, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredNodeState {
    pub name: NodeId,
    pub database_path: String,
}

impl DesiredNodeState {
    pub fn new(name: NodeId, database_path: impl Into<String>) -> Self {
        Self {
            name,
            database_path: database_path.into(),
        }
    }
}

/// Result of a reconcile. `changed` is only true once the update succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOutcome {
    pub changed: bool,
}

impl ReconcileOutcome {
    pub const UNCHANGED: Self = Self { changed: false };
    pub const CHANGED: Self = Self { changed: true };
}

/// Subset of the `GET /nodes/<id>` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct NodeInfo {
    pub storage: StorageInfo,
}

/// `storage` section: one entry per configured data directory.
#[derive(Debug, Deserialize)]
pub(crate) struct StorageInfo {
    pub hdd: Vec<StorageEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StorageEntry {
    pub path: String,
}

impl NodeInfo {
    /// Database directory of the first hdd storage entry.
    pub fn into_database_path(self) -> Option<String> {
        self.storage.hdd.into_iter().next().map(|entry| entry.path)
    }
}
