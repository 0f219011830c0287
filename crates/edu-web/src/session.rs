//! Session Context
//!
//! The signed-in user lives in reactive context so every `Guarded` view
//! re-evaluates when it changes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use edu_client::{ApiClient, ClientConfig};
use edu_core::model::{QuizResult, User};
use edu_core::{AuthSnapshot, ClientError};

use crate::storage::LocalStorageAuthStore;

/// Backend URL baked in at build time, if any
const API_URL: Option<&str> = option_env!("EDU_API_URL");

/// Auth state shared by the whole app
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    /// True until the persisted session has been checked
    pub loading: RwSignal<bool>,
}

impl AuthContext {
    pub fn snapshot(&self) -> AuthSnapshot {
        let loading = self.loading.get();
        self.user.with(|user| AuthSnapshot::from_user(loading, user.as_ref()))
    }

    pub fn sign_in(&self, user: User) {
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        self.user.set(None);
    }
}

/// Build the API client and auth context, provide both, and resume any
/// persisted session in the background.
pub fn provide_session() -> Result<(), ClientError> {
    let config = ClientConfig::from_value(API_URL.map(str::to_string));
    let client = ApiClient::from_config(&config, Arc::new(LocalStorageAuthStore))?;

    let auth = AuthContext {
        user: RwSignal::new(None),
        loading: RwSignal::new(true),
    };
    provide_context(client.clone());
    provide_context(auth);
    provide_context(LastResult(RwSignal::new(None)));

    spawn_local(async move {
        match client.auth().restore().await {
            Ok(user) => auth.user.set(user),
            Err(e) => leptos::logging::warn!("Could not restore session: {e}"),
        }
        auth.loading.set(false);
    });

    Ok(())
}

/// The most recent submission, handed from the quiz page to its results
/// page. Keyed by quiz id.
#[derive(Clone, Copy, Debug)]
pub struct LastResult(pub RwSignal<Option<(String, QuizResult)>>);

impl LastResult {
    pub fn for_quiz(&self, quiz_id: &str) -> Option<QuizResult> {
        self.0.with(|last| {
            last.as_ref()
                .filter(|(id, _)| id == quiz_id)
                .map(|(_, result)| result.clone())
        })
    }
}

pub fn use_last_result() -> LastResult {
    expect_context()
}

pub fn use_auth() -> AuthContext {
    expect_context()
}

pub fn use_client() -> ApiClient {
    expect_context()
}

/// Turns a failed call into the message a view shows.
///
/// An expired session also drops the signed-in user and leaves for the
/// error's redirect target.
#[derive(Clone, Copy, Debug)]
pub struct ErrorReporter {
    auth: AuthContext,
}

impl ErrorReporter {
    pub fn report(&self, err: &ClientError) -> String {
        if let Some(route) = err.redirect_target() {
            self.auth.sign_out();
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&route.path());
            }
        } else {
            leptos::logging::error!("Request failed: {err}");
        }
        err.user_message()
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter { auth: use_auth() }
}
