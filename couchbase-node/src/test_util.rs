//! Scripted fakes for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::clients::{HttpClient, HttpResponse};
use crate::error::TransportError;

/// A request as seen by [`FakeHttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub form: Vec<(String, String)>,
}

/// What the fake answers with for the next request.
pub enum Reply {
    Respond(HttpResponse),
    Refuse,
}

/// HTTP client replaying scripted replies and recording every request.
#[derive(Default)]
pub struct FakeHttpClient {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Reply::Respond(HttpResponse::new(status, body)))
    }

    pub fn refuse(self) -> Self {
        self.push(Reply::Refuse)
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST")
            .collect()
    }

    fn answer(&self, request: RecordedRequest) -> Result<HttpResponse, TransportError> {
        let url = format!("http://fake{}", request.path);
        self.requests.lock().unwrap().push(request);
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Refuse) => Err(TransportError::new(url, "connection refused")),
            None => panic!("unexpected request to {}", url),
        }
    }
}

#[async_trait]
impl HttpClient for FakeHttpClient {
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            form: Vec::new(),
        })
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, TransportError> {
        self.answer(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            form: form
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }
}

/// Minimal `GET /nodes/<id>` body reporting `path` as the database directory.
pub fn node_info_body(path: &str) -> String {
    serde_json::json!({
        "hostname": "127.0.0.1:8091",
        "storage": {
            "ssd": [],
            "hdd": [{
                "path": path,
                "index_path": path,
                "quotaMb": "none",
                "state": "ok"
            }]
        }
    })
    .to_string()
}
