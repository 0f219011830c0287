//! Mock transport for offline testing

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use edu_core::{ClientError, Result};

use super::{ApiRequest, ApiResponse, Transport};

/// Records every request and replies with canned responses.
///
/// Unrouted requests get `200 {}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), ApiResponse>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with `status` and a JSON body
    pub fn respond(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert((method, path.to_string()), ApiResponse::json(status, &body));
        }
        self
    }

    /// Reply to `method path` with `status` and a raw body, e.g. an empty `204`
    pub fn respond_raw(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert((method, path.to_string()), ApiResponse::new(status, body));
        }
        self
    }

    /// Everything sent so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests().pop()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method.clone(), request.path.clone());

        self.sent
            .lock()
            .map_err(|_| ClientError::Transport("mock transport poisoned".into()))?
            .push(request);

        let routes = self
            .routes
            .lock()
            .map_err(|_| ClientError::Transport("mock transport poisoned".into()))?;

        Ok(routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| ApiResponse::json(200, &json!({}))))
    }
}
