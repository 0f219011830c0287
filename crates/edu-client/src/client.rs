//! Authenticated API Client

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use edu_core::{AuthStore, ClientError, Result};

use crate::config::ClientConfig;
use crate::endpoints::{AdminApi, AuthApi, LearningApi, QuizApi, TranslationApi};
use crate::interceptor::{BearerAuth, RequestInterceptor, ResponseInterceptor, SessionExpiry};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Shared HTTP client for the EduAgent backend.
///
/// Owns the token store and installs the bearer and session-expiry
/// interceptors. Cloning is cheap; clones share the transport and store.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    store: Arc<dyn AuthStore>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn AuthStore>) -> Self {
        Self {
            request_interceptors: vec![Arc::new(BearerAuth::new(store.clone()))],
            response_interceptors: vec![Arc::new(SessionExpiry::new(store.clone()))],
            transport,
            store,
        }
    }

    /// Create a client against the configured backend
    pub fn from_config(config: &ClientConfig, store: Arc<dyn AuthStore>) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::new(Arc::new(transport), store))
    }

    /// Run `interceptor` on every request, after the built-in ones
    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Run `interceptor` on every response, after the built-in ones
    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// The token store this client owns
    pub fn store(&self) -> &dyn AuthStore {
        self.store.as_ref()
    }

    /// Whether a token is currently stored
    pub fn has_token(&self) -> bool {
        matches!(self.store.get(), Ok(Some(_)))
    }

    // ------------------------------------------------------------------------
    // Endpoint groups
    // ------------------------------------------------------------------------

    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub const fn learning(&self) -> LearningApi<'_> {
        LearningApi::new(self)
    }

    pub const fn quizzes(&self) -> QuizApi<'_> {
        QuizApi::new(self)
    }

    pub const fn translation(&self) -> TranslationApi<'_> {
        TranslationApi::new(self)
    }

    pub const fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    // ------------------------------------------------------------------------
    // Verbs
    // ------------------------------------------------------------------------

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::POST, path).with_body(serde_json::to_value(body)?);
        self.call(request).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(Method::PUT, path).with_body(serde_json::to_value(body)?);
        self.call(request).await
    }

    /// PUT without a body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(ApiRequest::new(Method::PUT, path)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(ApiRequest::new(Method::DELETE, path)).await
    }

    async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.execute(request).await?;
        if response.is_success() {
            return response.decode();
        }
        Err(ClientError::from_response(
            response.status,
            response.error_message(),
            response.error_field().as_deref(),
        ))
    }

    /// Send a request through the interceptor chain.
    ///
    /// Returns the raw response for any status except those a response
    /// interceptor turns into an error (`401` by default).
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        for interceptor in &self.request_interceptors {
            interceptor.intercept(&mut request)?;
        }

        let method = request.method.clone();
        let path = request.path.clone();
        tracing::debug!(%method, %path, "Sending request");

        let mut response = self.transport.send(request).await.inspect_err(|e| {
            tracing::error!(%method, %path, "Request failed: {}", e);
        })?;

        tracing::debug!(%method, %path, status = response.status, "Received response");

        for interceptor in &self.response_interceptors {
            response = interceptor.intercept(response)?;
        }
        Ok(response)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use edu_core::MemoryAuthStore;
    use serde_json::{Value, json};

    use crate::transport::MockTransport;

    fn client_with(transport: MockTransport, store: MemoryAuthStore) -> (ApiClient, Arc<MockTransport>, Arc<MemoryAuthStore>) {
        let transport = Arc::new(transport);
        let store = Arc::new(store);
        let client = ApiClient::new(transport.clone(), store.clone());
        (client, transport, store)
    }

    #[tokio::test]
    async fn test_stored_token_sent_as_bearer() {
        let (client, transport, _) = client_with(
            MockTransport::new().respond(Method::GET, "/api/quizzes", 200, json!([])),
            MemoryAuthStore::with_token("abc123"),
        );

        let _: Value = client.get("/api/quizzes").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/api/quizzes");
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
    }

    #[tokio::test]
    async fn test_no_token_no_header() {
        let (client, transport, _) = client_with(MockTransport::new(), MemoryAuthStore::new());

        let _: Value = client.get("/api/quizzes").await.unwrap();

        let request = transport.last_request().unwrap();
        assert!(request.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_401_clears_token_and_signals_login() {
        let (client, _, store) = client_with(
            MockTransport::new().respond(
                Method::GET,
                "/api/learning/recommendations",
                401,
                json!({ "error": "Token is not valid" }),
            ),
            MemoryAuthStore::new(),
        );

        let err = client
            .get::<Value>("/api/learning/recommendations")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::SessionExpired));
        assert_eq!(err.redirect_target().map(|r| r.path()), Some("/login".to_string()));
        assert_eq!(store.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_401_clears_existing_token() {
        let (client, _, store) = client_with(
            MockTransport::new().respond(Method::DELETE, "/api/admin/quizzes/q1", 401, json!({})),
            MemoryAuthStore::with_token("stale"),
        );

        let err = client.delete::<Value>("/api/admin/quizzes/q1").await.unwrap_err();
        assert!(matches!(err, ClientError::SessionExpired));
        assert!(!client.has_token());
        assert_eq!(store.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_error_statuses_propagate() {
        let (client, _, store) = client_with(
            MockTransport::new()
                .respond(Method::POST, "/api/learning/chat", 429, json!({ "error": "Too Many Requests" }))
                .respond(Method::GET, "/api/quizzes/missing", 404, json!({ "message": "Quiz not found" })),
            MemoryAuthStore::with_token("abc123"),
        );

        let err = client
            .post::<_, Value>("/api/learning/chat", &json!({ "message": "hi" }))
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());

        let err = client.get::<Value>("/api/quizzes/missing").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, ref message } if message == "Quiz not found"));

        // Only 401 touches the token
        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_quota_classification_reads_error_field_only() {
        let (client, _, _) = client_with(
            MockTransport::new()
                .respond(
                    Method::POST,
                    "/api/quizzes/generate",
                    500,
                    json!({ "error": "You exceeded your current quota" }),
                )
                .respond(
                    Method::DELETE,
                    "/api/admin/quizzes/65f4290ab",
                    404,
                    json!({ "error": "Quiz 65f4290ab not found" }),
                )
                .respond(Method::GET, "/api/quizzes", 500, json!({ "message": "quota service down" })),
            MemoryAuthStore::with_token("abc123"),
        );

        let err = client
            .post::<_, Value>("/api/quizzes/generate", &json!({}))
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());

        let err = client.delete::<Value>("/api/admin/quizzes/65f4290ab").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, ref message } if message == "Quiz 65f4290ab not found"));

        let err = client.get::<Value>("/api/quizzes").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_custom_interceptors_run_after_builtins() {
        struct Counter(Arc<AtomicUsize>);

        impl RequestInterceptor for Counter {
            fn intercept(&self, request: &mut ApiRequest) -> Result<()> {
                assert!(request.header("authorization").is_some());
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let (client, _, _) = client_with(MockTransport::new(), MemoryAuthStore::with_token("t"));
        let client = client.with_request_interceptor(Counter(count.clone()));

        let _: Value = client.get("/api/auth/profile").await.unwrap();
        let _: Value = client.get("/api/auth/profile").await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
