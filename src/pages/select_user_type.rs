//! Post-registration role selection.
//!
//! A narrower variant of the callback flow: the registration response hands
//! its token over in the query string, the user picks listener or artist,
//! and submit persists the role before completing the login. Unlike the
//! callback page, failures stay on this page with an inline error so the
//! user can retry.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::net::types::UserType;
use crate::state::session::use_session;

/// Decode the user id from the token, persist the chosen role, then fetch
/// the updated profile for the session.
#[cfg(feature = "hydrate")]
async fn finalize_registration(
    token: &str,
    user_type: UserType,
) -> Result<crate::net::types::User, String> {
    let claims = crate::util::token::decode_claims(token)
        .ok_or_else(|| "Invalid token format".to_owned())?;
    crate::net::api::update_user_type(token, claims.user_id, user_type).await?;
    crate::net::api::fetch_me(token)
        .await
        .ok_or_else(|| "Failed to fetch user data after role selection.".to_owned())
}

#[component]
pub fn SelectUserTypePage() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let query = use_query_map();

    let Some(token) = query.get_untracked().get("token") else {
        return view! {
            <div class="role-page role-page--error">
                <h2>"Error"</h2>
                <p>"No authentication token found. Please try logging in again."</p>
                <a href="/login" class="btn">"Go to Login"</a>
            </div>
        }
        .into_any();
    };

    let user_type = RwSignal::new(UserType::Listener);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let on_submit = move |_| {
        if loading.get() {
            return;
        }
        loading.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let token = token.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match finalize_registration(&token, user_type.get_untracked()).await {
                    Ok(user) => {
                        session.login(token, user);
                        navigate(
                            "/home",
                            NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(message) => {
                        error.set(message);
                        loading.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&token, session);
        }
    };

    view! {
        <div class="role-page">
            <h1 class="role-page__brand">"JETSWITCH"</h1>
            <h2>"What best describes you?"</h2>

            <Show when=move || !error.get().is_empty()>
                <div class="auth-error">{move || error.get()}</div>
            </Show>

            <div class="role-page__cards">
                <RoleCard
                    role=UserType::Listener
                    title="Listener"
                    blurb="I want to discover new music and find songs similar to my favorites."
                    selected=user_type
                />
                <RoleCard
                    role=UserType::Artist
                    title="Artist"
                    blurb="I create music and want to upload my tracks and find collaborators."
                    selected=user_type
                />
            </div>

            <button
                class="btn btn--primary"
                type="button"
                disabled=move || loading.get()
                on:click=on_submit
            >
                {move || if loading.get() { "Continuing..." } else { "Continue" }}
            </button>
        </div>
    }
    .into_any()
}

/// One selectable role card; clicking it makes its role the current choice.
#[component]
fn RoleCard(
    role: UserType,
    title: &'static str,
    blurb: &'static str,
    selected: RwSignal<UserType>,
) -> impl IntoView {
    view! {
        <div
            class="role-card"
            class=("role-card--selected", move || selected.get() == role)
            on:click=move |_| selected.set(role)
        >
            <h3>{title}</h3>
            <p>{blurb}</p>
        </div>
    }
}
