//! HTTP Transport
//!
//! The generic request function the client wraps. Interceptors and status
//! handling live above this layer; a transport only moves bytes.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use edu_core::Result;

/// An outgoing request, relative to the transport's base URL
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,

    /// Absolute path, e.g. `/api/quizzes`
    pub path: String,

    pub headers: HeaderMap,

    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Header value as text, if present and printable
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A response as received, before status classification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decode the body.
    ///
    /// An empty body (`204 No Content`) decodes as `null`, or as `{}` when
    /// the target cannot be built from `null`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.trim().is_empty() {
            let value = serde_json::from_value(Value::Null)
                .or_else(|_| serde_json::from_value(Value::Object(Map::new())))?;
            return Ok(value);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The body's `error` field, if it has one
    pub fn error_field(&self) -> Option<String> {
        serde_json::from_str::<Value>(&self.body)
            .ok()?
            .get("error")?
            .as_str()
            .map(String::from)
    }

    /// Error text the backend put in the body, falling back to the status reason
    pub fn error_message(&self) -> String {
        let from_body = serde_json::from_str::<Value>(&self.body).ok().and_then(|data| {
            ["error", "message"]
                .iter()
                .find_map(|key| data.get(*key).and_then(Value::as_str).map(String::from))
        });

        from_body.unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Request failed")
                .to_string()
        })
    }
}

/// Transport trait (Strategy pattern)
///
/// `HttpTransport` talks to the real backend; `MockTransport` replays canned
/// responses in tests.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    /// Send one request and return whatever status came back.
    ///
    /// Only failures to get a response at all are errors here.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
