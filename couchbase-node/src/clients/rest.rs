//! reqwest-backed client for the Management REST API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{HttpClient, HttpResponse};
use crate::error::TransportError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8091;

/// Where and how to reach the cluster.
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub host: String,
    pub port: u16,
    /// Basic auth username; the password is only sent alongside it.
    pub username: Option<String>,
    pub password: Option<String>,
    /// Whole-request timeout. `None` leaves it to reqwest (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: None,
            password: None,
            timeout: None,
        }
    }
}

impl RestConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Client for one cluster endpoint. Cheap to clone; connections are pooled.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<(String, Option<String>)>,
}

impl RestClient {
    pub fn new(config: &RestConfig) -> Result<Self, TransportError> {
        let base_url = config.base_url();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::new(&base_url, e))?;

        Ok(Self {
            http,
            base_url,
            credentials: config
                .username
                .clone()
                .map(|user| (user, config.password.clone())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, password)) => request.basic_auth(user, password.as_deref()),
            None => request,
        }
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, TransportError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| TransportError::new(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(url, e))?;

        debug!(url = %url, status, "Management API responded");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for RestClient {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        self.send(&url, self.http.get(&url)).await
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        self.send(&url, self.http.post(&url).form(form)).await
    }
}
