//! Reads the current node state from the Management REST API.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::clients::HttpClient;
use crate::error::{Error, Result};
use crate::node::{CurrentNodeState, NodeId, NodeInfo};

/// Source of the current state of a node.
#[async_trait]
pub trait StateReader: Send + Sync {
    async fn current_state(&self, node: &NodeId) -> Result<CurrentNodeState>;
}

/// [`StateReader`] backed by `GET /nodes/<id>`.
pub struct NodeStateReader {
    client: Arc<dyn HttpClient>,
}

impl NodeStateReader {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StateReader for NodeStateReader {
    async fn current_state(&self, node: &NodeId) -> Result<CurrentNodeState> {
        let response = self.client.get(&node.info_path()).await?;

        if !response.is_success() {
            return Err(Error::RemoteState {
                node: node.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        let malformed = |reason: String| Error::MalformedResponse {
            node: node.to_string(),
            reason,
        };

        let info: NodeInfo =
            serde_json::from_str(&response.body).map_err(|e| malformed(e.to_string()))?;
        let database_path = info
            .into_database_path()
            .ok_or_else(|| malformed("storage.hdd is empty".to_string()))?;

        debug!(node = %node, database_path = %database_path, "Read current node state");

        Ok(CurrentNodeState {
            name: node.clone(),
            database_path,
        })
    }
}
