//! Clients for the Couchbase Management REST API.
//!
//! Reconciliation talks to the cluster only through [`HttpClient`], so the
//! transport can be swapped for a fake in tests:
//! - [`RestClient`]: reqwest-backed client for a single `host:port`

pub mod rest;

use async_trait::async_trait;

use crate::error::TransportError;

pub use rest::{RestClient, RestConfig};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP capability against the cluster's management endpoint.
///
/// Paths are absolute (`/nodes/self`) and relative to the configured host.
/// Any status is returned as a response; only delivery failures are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError>;

    /// POST an `application/x-www-form-urlencoded` body.
    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError>;
}
