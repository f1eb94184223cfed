//! Error types for node reconciliation.

use thiserror::Error;

/// Boxed source error carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A request never produced a usable response (connection refused, DNS
/// failure, timeout, truncated body).
#[derive(Debug, Error)]
#[error("request to {url} failed: {source}")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: BoxError,
}

impl TransportError {
    pub fn new(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Why a settings update did not go through.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The cluster answered with a non-2xx status.
    #[error("settings update rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request was not delivered.
    #[error(transparent)]
    Transport(TransportError),
}

/// Errors surfaced by reading or reconciling a node.
#[derive(Debug, Error)]
pub enum Error {
    /// Node identifiers are interpolated into URLs and must not be empty.
    #[error("node identifier must not be empty")]
    EmptyNodeId,

    /// Network-level failure while reading node state.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Node info request returned a non-2xx status.
    #[error("node info for {node} returned status {status}: {body}")]
    RemoteState {
        node: String,
        status: u16,
        body: String,
    },

    /// Node info was returned but did not have the expected shape.
    #[error("malformed node info for {node}: {reason}")]
    MalformedResponse { node: String, reason: String },

    /// The database path update failed; the node is assumed unchanged.
    #[error("failed to update database path of {node}: {source}")]
    Reconcile {
        node: String,
        #[source]
        source: ReconcileError,
    },
}

impl Error {
    /// HTTP status carried by the error, if the cluster answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RemoteState { status, .. } => Some(*status),
            Error::Reconcile {
                source: ReconcileError::Rejected { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for node operations.
pub type Result<T> = std::result::Result<T, Error>;
