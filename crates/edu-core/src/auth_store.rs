//! Bearer Token Storage
//!
//! The persisted credential is a single opaque string. Front-ends decide
//! where it lives (browser `localStorage`, a file, memory); the API client
//! is its only reader and writer.

use std::sync::RwLock;

use crate::error::{ClientError, Result};

/// Fixed key the token is persisted under
pub const TOKEN_KEY: &str = "token";

/// Token store trait for persistence
pub trait AuthStore: Send + Sync {
    /// Current token, if one is stored
    fn get(&self) -> Result<Option<String>>;

    /// Replace the stored token
    fn set(&self, token: &str) -> Result<()>;

    /// Forget the stored token (no-op when absent)
    fn clear(&self) -> Result<()>;
}

/// Blank values read back from storage count as "no token".
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// In-memory token store (for tests and embedding)
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    token: RwLock<Option<String>>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

fn poisoned<T>(_: T) -> ClientError {
    ClientError::Storage("token lock poisoned".into())
}

impl AuthStore for MemoryAuthStore {
    fn get(&self) -> Result<Option<String>> {
        let token = self.token.read().map_err(poisoned)?;
        Ok(normalize_token(token.clone()))
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().map_err(poisoned)? = None;
        Ok(())
    }
}
