//! Error Types

use thiserror::Error;

use crate::route::Route;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Phrases the backend uses when an upstream AI quota is exhausted.
const QUOTA_MARKERS: [&str; 3] = ["quota", "Too Many Requests", "exceeded your current quota"];

/// Upstream status code, matched only as a standalone word
const QUOTA_STATUS: &str = "429";

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Backend answered 401; the stored token has already been cleared
    #[error("Session expired")]
    SessionExpired,

    /// Status 429 or a quota-exhaustion message from the backend
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// Signed in, but the account lacks the required role
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Form input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network-level failure (DNS, TLS, connection reset, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Stored token cannot be carried in an HTTP header
    #[error("Stored token is not a valid header value")]
    InvalidToken,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token storage failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Classify a non-success response by status alone.
    ///
    /// `message` is whatever the backend put in its error body.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status == 429 {
            Self::RateLimited(message)
        } else {
            Self::Api { status, message }
        }
    }

    /// Classify a non-success response, also checking the body's `error`
    /// field for quota wording relayed from the AI provider.
    pub fn from_response(status: u16, message: impl Into<String>, error: Option<&str>) -> Self {
        if error.is_some_and(is_quota_message) {
            return Self::RateLimited(message.into());
        }
        Self::from_status(status, message)
    }

    /// HTTP status behind this error, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// Where the caller should navigate after this error.
    ///
    /// Only an expired session forces navigation; everything else stays on
    /// the current view.
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Self::SessionExpired => Some(Route::Login),
            _ => None,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionExpired => "Your session has expired. Please log in again.".into(),
            Self::RateLimited(_) => "You've reached the daily limit for AI requests (20 requests per day on the free plan). \
                 Please wait 24 hours for the quota to reset."
                .into(),
            Self::AccessDenied(msg) | Self::Validation(msg) => msg.clone(),
            Self::Api { status: 404, .. } => "The requested item could not be found.".into(),
            Self::Transport(_) => "Could not reach the EduAgent service. Check your connection.".into(),
            _ => "Something went wrong. Please try again.".into(),
        }
    }
}

/// Whether a backend error message reports an exhausted AI quota
pub fn is_quota_message(message: &str) -> bool {
    QUOTA_MARKERS.iter().any(|marker| message.contains(marker))
        || message
            .split(|c: char| !c.is_ascii_alphanumeric())
            .any(|word| word == QUOTA_STATUS)
}
