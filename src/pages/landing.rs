//! Public landing page.
//!
//! Guests get the marketing hero with register/login entries; a signed-in
//! user gets the welcome card instead.

use leptos::prelude::*;

use crate::components::welcome_card::WelcomeCard;
use crate::state::session::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="landing-page">
            <Show when=move || session.is_authenticated() fallback=|| view! { <GuestHero/> }>
                <WelcomeCard/>
            </Show>
        </div>
    }
}

#[component]
fn GuestHero() -> impl IntoView {
    view! {
        <div class="landing-hero">
            <h1 class="landing-hero__brand">"JetSwitch"</h1>
            <p class="landing-hero__tagline">
                "Unlock your music taste. Find songs that match your unique style."
            </p>
            <div class="landing-hero__actions">
                <a href="/register" class="btn btn--primary">"Get Started"</a>
                <a href="/login" class="btn btn--primary">"Join Us"</a>
            </div>
        </div>
    }
}
