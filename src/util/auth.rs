//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components should apply identical unauthenticated
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Session, SessionState};

/// True when the session grants no access to protected routes.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_authenticated()
}

/// Redirect to the public landing page whenever the session is
/// unauthenticated. The check re-runs on every session change, so a logout
/// while the page is mounted redirects on the next evaluation instead of
/// leaving stale content up.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
