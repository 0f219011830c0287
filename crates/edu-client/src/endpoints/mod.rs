//! Endpoint Groups
//!
//! One method per backend operation, each a fixed verb + path + optional
//! body. No retries, caching or batching happen here.

use std::borrow::Cow;

mod admin;
mod auth;
mod learning;
mod quiz;
mod translation;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use learning::LearningApi;
pub use quiz::QuizApi;
pub use translation::TranslationApi;

/// Percent-encode an id for use as one path segment
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
