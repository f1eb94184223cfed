//! Reconcilers for node settings.
//!
//! A reconciler compares desired state (supplied by the caller) with actual
//! state (read from the cluster) and takes the single action that converges
//! them.

pub mod node;

use async_trait::async_trait;

use crate::error::Result;

pub use node::NodeReconciler;

/// Trait for resource reconcilers.
#[async_trait]
pub trait Reconciler: Send + Sync {
    /// The desired state supplied by the caller.
    type Spec;
    /// What the caller learns about the run.
    type Status;

    /// Compare desired vs actual state and take action.
    async fn reconcile(&self, spec: &Self::Spec) -> Result<Self::Status>;
}
