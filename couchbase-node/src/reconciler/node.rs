//! Node reconciler - converges the database path of a node.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::Reconciler;
use crate::clients::HttpClient;
use crate::error::{Error, ReconcileError, Result};
use crate::node::{DesiredNodeState, ReconcileOutcome};
use crate::reader::{NodeStateReader, StateReader};

/// Form field of `/nodes/<id>/controller/settings` holding the data directory.
const PATH_FIELD: &str = "path";

/// Reconciler for the database path of a single node.
pub struct NodeReconciler {
    reader: Arc<dyn StateReader>,
    client: Arc<dyn HttpClient>,
}

impl NodeReconciler {
    pub fn new(reader: Arc<dyn StateReader>, client: Arc<dyn HttpClient>) -> Self {
        Self { reader, client }
    }

    /// Read and write through the same client.
    pub fn from_client(client: Arc<dyn HttpClient>) -> Self {
        Self::new(Arc::new(NodeStateReader::new(client.clone())), client)
    }
}

#[async_trait]
impl Reconciler for NodeReconciler {
    type Spec = DesiredNodeState;
    type Status = ReconcileOutcome;

    async fn reconcile(&self, desired: &DesiredNodeState) -> Result<ReconcileOutcome> {
        let node = &desired.name;
        let current = self.reader.current_state(node).await?;

        // Exact comparison; callers normalize paths.
        if current.database_path == desired.database_path {
            info!(node = %node, path = %current.database_path, "Database path up to date");
            return Ok(ReconcileOutcome::UNCHANGED);
        }

        info!(
            node = %node,
            from = %current.database_path,
            to = %desired.database_path,
            "Updating database path"
        );

        let failed = |source: ReconcileError| {
            error!(node = %node, "Failed to update database path: {}", source);
            Error::Reconcile {
                node: node.to_string(),
                source,
            }
        };

        let response = self
            .client
            .post_form(
                &node.settings_path(),
                &[(PATH_FIELD, desired.database_path.as_str())],
            )
            .await
            .map_err(|e| failed(ReconcileError::Transport(e)))?;

        if !response.is_success() {
            return Err(failed(ReconcileError::Rejected {
                status: response.status,
                body: response.body,
            }));
        }

        Ok(ReconcileOutcome::CHANGED)
    }
}
