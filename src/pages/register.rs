//! Registration page.
//!
//! A successful registration returns a token without a final role; the page
//! forwards the token to `/select-user-type` where the login completes.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::google_login_button::GoogleLoginButton;
use crate::net::types::RegisterRequest;

const MIN_PASSWORD_LEN: usize = 6;

/// Client-side form validation mirroring the input constraints.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in all fields.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(request) => request,
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
                match crate::net::api::register(&request).await {
                    Ok(auth) => {
                        navigate(
                            &format!("/select-user-type?token={}", auth.token),
                            NavigateOptions::default(),
                        );
                    }
                    Err(message) => {
                        error.set(message);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"JETSWITCH"</h1>
                <h2>"Register"</h2>

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
                        "Email:"
                        <input
                            class="auth-input"
                            type="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password:"
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            minlength="6"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Confirm Password:"
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            minlength="6"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "Already have an account? "
                    <a href="/login" class="link-primary">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
