//! # edu-client
//!
//! Authenticated HTTP client for the EduAgent backend.
//!
//! ```text
//!  caller ──▶ BearerAuth ──▶ Transport ──▶ SessionExpiry ──▶ status check ──▶ caller
//!             (adds token)   (reqwest)     (401: clear token,
//!                                           Err(SessionExpired))
//! ```
//!
//! The client never navigates. A `401` comes back as
//! `ClientError::SessionExpired`, whose `redirect_target()` tells the
//! front-end where to go.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use edu_client::{ApiClient, ClientConfig};
//! use edu_core::MemoryAuthStore;
//!
//! let client = ApiClient::from_config(&ClientConfig::from_env(), Arc::new(MemoryAuthStore::new()))?;
//! client.auth().login(&Credentials::new("ada@example.com", "hunter22")).await?;
//! let quizzes = client.quizzes().list().await?;
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod interceptor;
pub mod loaders;
pub mod transport;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use loaders::{DashboardData, QuizOverview};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, MockTransport, Transport};
pub use reqwest::Method;

// Re-export core types for convenience
pub use edu_core::{AuthStore, ClientError, Result};
