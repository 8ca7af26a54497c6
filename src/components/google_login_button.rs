//! Google OAuth entry button.
//!
//! Delegated login is a full-page redirect: the backend bounces the browser
//! to Google and returns it to `/auth/callback?token=...` afterwards, so
//! there is no JS-observable response here.

use leptos::prelude::*;

/// Button that hands the browser to the backend's Google OAuth endpoint.
#[component]
pub fn GoogleLoginButton() -> impl IntoView {
    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(&crate::net::config::endpoint("/api/auth/google"));
            }
        }
    };

    view! {
        <button class="google-button" type="button" on:click=on_click>
            "Continue with Google"
        </button>
    }
}
