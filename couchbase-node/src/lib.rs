//! couchbase-node: database path reconciliation for Couchbase nodes
//!
//! Reads a node's current database path from the Management REST API and
//! updates it when it differs from the desired one.
//!
//! # Example
//! ```ignore
//! use std::sync::Arc;
//! use couchbase_node::{DesiredNodeState, NodeId, NodeReconciler, Reconciler, RestClient, RestConfig};
//!
//! let client = Arc::new(RestClient::new(&RestConfig::default())?);
//! let reconciler = NodeReconciler::from_client(client);
//! let desired = DesiredNodeState::new(NodeId::local(), "/mnt/couchbase-server/data");
//! let outcome = reconciler.reconcile(&desired).await?;
//! ```

pub mod clients;
pub mod error;
pub mod node;
pub mod reader;
pub mod reconciler;

#[cfg(test)]
mod test_util;

pub use clients::{HttpClient, HttpResponse, RestClient, RestConfig};
pub use error::{Error, ReconcileError, Result, TransportError};
pub use node::{CurrentNodeState, DesiredNodeState, NodeId, ReconcileOutcome, SELF_NODE};
pub use reader::{NodeStateReader, StateReader};
pub use reconciler::{NodeReconciler, Reconciler};
