//! Authenticated home dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::welcome_card::WelcomeCard;
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

/// Home page — redirects to the landing page when not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    view! {
        <div class="home-page">
            <WelcomeCard/>
        </div>
    }
}
