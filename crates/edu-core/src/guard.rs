//! Route Guard
//!
//! Decides, per render, whether a route shows its view, a placeholder, or
//! sends the visitor elsewhere. A pure function of the session snapshot and
//! the route's capability.

use serde::{Deserialize, Serialize};

use crate::model::{Role, User};
use crate::route::Route;

/// What a route requires of the visitor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Public route, never guarded
    None,
    /// Landing page; signed-in visitors are sent to the dashboard
    Guest,
    /// Any signed-in account
    User,
    /// Signed-in administrator
    Admin,
}

/// Session state as seen by the guard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Session bootstrap still in flight
    pub loading: bool,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

impl AuthSnapshot {
    /// Snapshot for a resolved (or resolving) user
    pub fn from_user(loading: bool, user: Option<&User>) -> Self {
        Self {
            loading,
            is_authenticated: user.is_some(),
            is_admin: user.is_some_and(|u| u.role == Role::Admin),
        }
    }
}

/// Result of evaluating a guard
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Show a pending placeholder; do not navigate
    Pending,
    /// Navigate to another route instead of rendering
    Redirect(Route),
    /// Render the wrapped view
    Render,
}

/// Evaluate a route guard.
pub fn evaluate(snapshot: AuthSnapshot, capability: Capability) -> GuardOutcome {
    match capability {
        Capability::None => GuardOutcome::Render,
        Capability::Guest if snapshot.is_authenticated => GuardOutcome::Redirect(Route::Dashboard),
        Capability::Guest => GuardOutcome::Render,
        Capability::User | Capability::Admin => {
            if snapshot.loading {
                GuardOutcome::Pending
            } else if !snapshot.is_authenticated {
                GuardOutcome::Redirect(Route::Login)
            } else if matches!(capability, Capability::Admin) && !snapshot.is_admin {
                GuardOutcome::Redirect(Route::Dashboard)
            } else {
                GuardOutcome::Render
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(loading: bool, is_authenticated: bool, is_admin: bool) -> AuthSnapshot {
        AuthSnapshot { loading, is_authenticated, is_admin }
    }

    fn all_snapshots() -> impl Iterator<Item = AuthSnapshot> {
        (0..8u8).map(|bits| snapshot(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0))
    }

    #[test]
    fn test_loading_is_pending_for_guarded_routes() {
        for snap in all_snapshots().filter(|s| s.loading) {
            assert_eq!(evaluate(snap, Capability::User), GuardOutcome::Pending);
            assert_eq!(evaluate(snap, Capability::Admin), GuardOutcome::Pending);
        }
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        for snap in all_snapshots().filter(|s| !s.loading && !s.is_authenticated) {
            assert_eq!(evaluate(snap, Capability::User), GuardOutcome::Redirect(Route::Login));
            assert_eq!(evaluate(snap, Capability::Admin), GuardOutcome::Redirect(Route::Login));
        }
    }

    #[test]
    fn test_non_admin_redirects_to_dashboard() {
        let snap = snapshot(false, true, false);
        assert_eq!(evaluate(snap, Capability::Admin), GuardOutcome::Redirect(Route::Dashboard));
        assert_eq!(evaluate(snap, Capability::User), GuardOutcome::Render);
    }

    #[test]
    fn test_admin_renders() {
        let snap = snapshot(false, true, true);
        assert_eq!(evaluate(snap, Capability::Admin), GuardOutcome::Render);
        assert_eq!(evaluate(snap, Capability::User), GuardOutcome::Render);
    }

    #[test]
    fn test_public_routes_always_render() {
        for snap in all_snapshots() {
            assert_eq!(evaluate(snap, Capability::None), GuardOutcome::Render);
        }
    }

    #[test]
    fn test_landing_sends_signed_in_visitors_to_dashboard() {
        assert_eq!(
            evaluate(snapshot(false, true, false), Capability::Guest),
            GuardOutcome::Redirect(Route::Dashboard)
        );
        assert_eq!(evaluate(snapshot(true, false, false), Capability::Guest), GuardOutcome::Render);
    }

    #[test]
    fn test_snapshot_from_user() {
        let mut user = User::default();
        assert_eq!(AuthSnapshot::from_user(false, None), snapshot(false, false, false));
        assert_eq!(AuthSnapshot::from_user(false, Some(&user)), snapshot(false, true, false));

        user.role = Role::Admin;
        assert_eq!(AuthSnapshot::from_user(true, Some(&user)), snapshot(true, true, true));
    }
}
