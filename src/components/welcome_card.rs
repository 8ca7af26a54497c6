//! Signed-in welcome card shared by the landing and home pages.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Welcome card with the username, role line, and a logout button.
///
/// Logout only mutates the session; any mounted route guard observes the
/// change and handles its own redirect.
#[component]
pub fn WelcomeCard() -> impl IntoView {
    let session = use_session();

    let welcome = move || match session.user() {
        Some(user) => format!("Welcome back, {}!", user.username),
        None => "Welcome back!".to_owned(),
    };
    let role_line = move || match session.user() {
        Some(user) => format!("You are logged in as {}.", user.user_type.as_str()),
        None => "You are logged in.".to_owned(),
    };

    view! {
        <div class="welcome-card">
            <h1 class="welcome-card__brand">"JETSWITCH"</h1>
            <h2>{welcome}</h2>
            <p>{role_line}</p>
            <p>"Ready to discover music."</p>
            <a href="/upload" class="btn btn--primary">"Find similar tracks"</a>
            <button class="btn" type="button" on:click=move |_| session.logout()>
                "LOGOUT"
            </button>
        </div>
    }
}
