//! Delegated-login callback page.
//!
//! Re-entry point of the Google OAuth redirect: the backend minted a token
//! and put it in the query string. The page reconciles it into the session
//! and leaves — exactly one navigation per mount, and at most one
//! `Session::login`.
//!
//! ERROR HANDLING
//! ==============
//! A missing or undecodable token aborts to `/login`. A failing who-am-I
//! lookup does NOT abort: the user already holds a valid credential, so the
//! login completes with a minimal profile built from the token payload.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{TokenClaims, User, UserType};
use crate::state::session::use_session;
use crate::util::token::decode_claims;

/// Minimal profile from the token payload, used when the who-am-I lookup
/// fails. Email is unknown, the role defaults to listener, and the provider
/// is the one that just redirected us.
#[cfg(any(test, feature = "hydrate"))]
fn fallback_user(claims: &TokenClaims) -> User {
    User {
        id: claims.user_id,
        username: claims.username.clone(),
        email: String::new(),
        user_type: UserType::Listener,
        avatar_url: None,
        auth_provider: "google".to_owned(),
    }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    // One-shot: the token is read untracked, so the effect has no reactive
    // dependencies and runs once after the first render of this mount.
    Effect::new(move || {
        let navigate = navigate.clone();
        let Some(token) = query.get_untracked().get("token") else {
            navigate("/login", NavigateOptions::default());
            return;
        };
        let Some(claims) = decode_claims(&token) else {
            log::error!("failed to decode delegated-login token");
            navigate("/login", NavigateOptions::default());
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let user = match crate::net::api::fetch_me(&token).await {
                Some(user) => user,
                None => fallback_user(&claims),
            };
            session.login(token, user);
            navigate("/home", NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, claims, session);
    });

    view! {
        <div class="callback-page">
            <h2>"Processing login..."</h2>
            <p>"Please wait while we complete your authentication."</p>
        </div>
    }
}
