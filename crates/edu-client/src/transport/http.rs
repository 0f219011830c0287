//! reqwest-backed transport

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use edu_core::{ClientError, Result};

use super::{ApiRequest, ApiResponse, Transport};
use crate::config::ClientConfig;

/// Transport against the live backend
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, self.url(&request.path))
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ClientConfig::new("https://edu.example.com/");
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.url("/api/quizzes"), "https://edu.example.com/api/quizzes");
    }
}
