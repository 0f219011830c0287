//! Session endpoints

use edu_core::model::{AuthResponse, Credentials, ProfileUpdate, Registration, User};
use edu_core::{ClientError, Result};

use crate::client::ApiClient;

/// `/api/auth/*`
#[derive(Clone, Copy, Debug)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Sign in and persist the returned token
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/api/auth/login", credentials).await?;
        self.client.store().set(&response.token)?;
        tracing::info!(user = %response.user.username, "Signed in");
        Ok(response)
    }

    /// Sign in through the admin console.
    ///
    /// A non-admin account is signed straight back out.
    pub async fn admin_login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response = self.login(credentials).await?;
        if response.user.is_admin() {
            return Ok(response);
        }

        self.logout()?;
        Err(ClientError::AccessDenied(
            "Access denied. This login is for administrators only.".into(),
        ))
    }

    /// Create an account and persist the returned token
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/api/auth/register", registration).await?;
        self.client.store().set(&response.token)?;
        tracing::info!(user = %response.user.username, "Registered");
        Ok(response)
    }

    pub async fn profile(&self) -> Result<User> {
        self.client.get("/api/auth/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        self.client.put("/api/auth/profile", update).await
    }

    /// Forget the stored token. No request is made.
    pub fn logout(&self) -> Result<()> {
        self.client.store().clear()
    }

    /// Resume a persisted session.
    ///
    /// Without a stored token this returns `None` without touching the
    /// network; otherwise the profile is fetched with it.
    pub async fn restore(&self) -> Result<Option<User>> {
        if !self.client.has_token() {
            return Ok(None);
        }
        self.profile().await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use edu_core::{AuthStore, MemoryAuthStore};
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::transport::MockTransport;

    fn login_reply(role: &str) -> serde_json::Value {
        json!({
            "token": "fresh-token",
            "user": { "_id": "u1", "username": "ada", "email": "ada@example.com", "role": role }
        })
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let transport = Arc::new(
            MockTransport::new().respond(Method::POST, "/api/auth/login", 200, login_reply("user")),
        );
        let store = Arc::new(MemoryAuthStore::new());
        let client = ApiClient::new(transport.clone(), store.clone());

        let response = client
            .auth()
            .login(&Credentials::new("ada@example.com", "hunter22"))
            .await
            .unwrap();

        assert_eq!(response.user.username, "ada");
        assert_eq!(store.get().unwrap().as_deref(), Some("fresh-token"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.body, Some(json!({ "email": "ada@example.com", "password": "hunter22" })));
    }

    #[tokio::test]
    async fn test_admin_login_rejects_regular_account() {
        let transport = Arc::new(
            MockTransport::new().respond(Method::POST, "/api/auth/login", 200, login_reply("user")),
        );
        let store = Arc::new(MemoryAuthStore::new());
        let client = ApiClient::new(transport, store.clone());

        let err = client
            .auth()
            .admin_login(&Credentials::new("ada@example.com", "hunter22"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::AccessDenied(_)));
        assert_eq!(store.get().unwrap(), None);
    }

    #[tokio::test]
    async fn test_admin_login_accepts_admin() {
        let transport = Arc::new(
            MockTransport::new().respond(Method::POST, "/api/auth/login", 200, login_reply("admin")),
        );
        let store = Arc::new(MemoryAuthStore::new());
        let client = ApiClient::new(transport, store.clone());

        let response = client
            .auth()
            .admin_login(&Credentials::new("root@example.com", "hunter22"))
            .await
            .unwrap();

        assert!(response.user.is_admin());
        assert!(client.has_token());
    }

    #[tokio::test]
    async fn test_restore_without_token_skips_network() {
        let transport = Arc::new(MockTransport::new());
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::new()));

        assert_eq!(client.auth().restore().await.unwrap(), None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_restore_with_token_fetches_profile() {
        let transport = Arc::new(MockTransport::new().respond(
            Method::GET,
            "/api/auth/profile",
            200,
            json!({ "_id": "u1", "username": "ada", "email": "ada@example.com" }),
        ));
        let client = ApiClient::new(transport.clone(), Arc::new(MemoryAuthStore::with_token("abc123")));

        let user = client.auth().restore().await.unwrap().unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(
            transport.last_request().unwrap().header("authorization"),
            Some("Bearer abc123")
        );
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let store = Arc::new(MemoryAuthStore::with_token("abc123"));
        let client = ApiClient::new(Arc::new(MockTransport::new()), store.clone());

        client.auth().logout().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
