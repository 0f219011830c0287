//! Request/Response Interceptors
//!
//! Hooks run by `ApiClient` around every transport call. Both built-in
//! interceptors share the client's `AuthStore`.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use edu_core::{AuthStore, ClientError, Result};

use crate::transport::{ApiRequest, ApiResponse};

/// Observes or rewrites every outgoing request
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut ApiRequest) -> Result<()>;
}

/// Observes every response before status handling
pub trait ResponseInterceptor: Send + Sync {
    fn intercept(&self, response: ApiResponse) -> Result<ApiResponse>;
}

/// Attaches `Authorization: Bearer <token>` when a token is stored
pub struct BearerAuth {
    store: Arc<dyn AuthStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: &mut ApiRequest) -> Result<()> {
        let token = match self.store.get() {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(()),
            Err(e) => {
                tracing::warn!("Token store unreadable, sending request without credentials: {}", e);
                return Ok(());
            }
        };

        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::InvalidToken)?;
        request.headers.insert(AUTHORIZATION, value);
        Ok(())
    }
}

/// Invalidates the session on `401`, whichever endpoint returned it
pub struct SessionExpiry {
    store: Arc<dyn AuthStore>,
}

impl SessionExpiry {
    pub fn new(store: Arc<dyn AuthStore>) -> Self {
        Self { store }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn intercept(&self, response: ApiResponse) -> Result<ApiResponse> {
        if response.status != 401 {
            return Ok(response);
        }

        tracing::warn!("Backend rejected credentials; clearing stored token");
        if let Err(e) = self.store.clear() {
            tracing::error!("Failed to clear stored token: {}", e);
        }
        Err(ClientError::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_core::MemoryAuthStore;
    use reqwest::Method;

    #[test]
    fn test_bearer_attached_when_token_stored() {
        let store = Arc::new(MemoryAuthStore::with_token("abc123"));
        let mut request = ApiRequest::new(Method::GET, "/api/quizzes");

        BearerAuth::new(store).intercept(&mut request).unwrap();
        assert_eq!(request.header("authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn test_request_unmodified_without_token() {
        let store = Arc::new(MemoryAuthStore::new());
        let mut request = ApiRequest::new(Method::GET, "/api/quizzes");

        BearerAuth::new(store).intercept(&mut request).unwrap();
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_token_with_control_char_is_rejected() {
        let store = Arc::new(MemoryAuthStore::with_token("abc\u{7f}def"));
        let mut request = ApiRequest::new(Method::GET, "/api/quizzes");

        let err = BearerAuth::new(store).intercept(&mut request).unwrap_err();
        assert!(matches!(err, ClientError::InvalidToken));
    }

    #[test]
    fn test_401_clears_token() {
        let store = Arc::new(MemoryAuthStore::with_token("abc123"));
        let expiry = SessionExpiry::new(store.clone());

        let err = expiry.intercept(ApiResponse::new(401, "")).unwrap_err();
        assert!(matches!(err, ClientError::SessionExpired));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_other_statuses_pass_through() {
        let store = Arc::new(MemoryAuthStore::with_token("abc123"));
        let expiry = SessionExpiry::new(store.clone());

        for status in [200, 403, 429, 500] {
            let response = expiry.intercept(ApiResponse::new(status, "{}")).unwrap();
            assert_eq!(response.status, status);
        }
        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));
    }
}
