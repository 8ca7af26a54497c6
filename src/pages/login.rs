//! Login page with username/password form and Google OAuth entry.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::google_login_button::GoogleLoginButton;
use crate::state::session::use_session;

/// Trim the username and require both fields before hitting the backend.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&username_value, &password_value).await {
                    Ok(auth) => match auth.user {
                        Some(user) => {
                            session.login(auth.token, user);
                            navigate("/home", NavigateOptions::default());
                        }
                        None => {
                            error.set("Login failed".to_owned());
                            busy.set(false);
                        }
                    },
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"JETSWITCH"</h1>
                <h2>"Login"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="auth-error">{move || error.get()}</div>
                </Show>

                <GoogleLoginButton/>
                <div class="auth-divider">"OR"</div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Username:"
                        <input
                            class="auth-input"
                            type="text"
                            required=true
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password:"
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "No account? "
                    <a href="/register" class="link-primary">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
