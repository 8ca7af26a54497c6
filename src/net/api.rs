//! REST API helpers for the JetSwitch backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Fallible calls return `Result<_, String>` so pages can surface backend
//! errors inline without panicking. `fetch_me` returns `Option` because its
//! failure is masked by a fallback profile in the callback flow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::config::endpoint;
#[cfg(feature = "hydrate")]
use super::types::UpdateUserTypeRequest;
use super::types::{
    AnalyzeRequest, AnalyzeResponse, AuthResponse, FeedbackRequest, RegisterRequest, User, UserType,
};

/// Thumbs-up vote value.
pub const VOTE_UP: i32 = 1;
/// Thumbs-down vote value.
pub const VOTE_DOWN: i32 = -1;

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Surface the backend's `{"error": "..."}` body when present, falling back
/// to a generic message with the status code.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_body(status: u16, body: &str, fallback: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => format!("{fallback}: {status}"),
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one on transport
/// failures.
pub async fn register(req: &RegisterRequest) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/register"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(resp.status(), &body, "registration failed"));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Authenticate via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's error message (wrong credentials included), or a
/// generic one on transport failures.
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/login"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(resp.status(), &body, "login failed"));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated principal from `GET /api/auth/me`.
/// Returns `None` on any failure; callers decide whether that is fatal.
pub async fn fetch_me(token: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct MeResponse {
            user: User,
        }
        let resp = gloo_net::http::Request::get(&endpoint("/api/auth/me"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<MeResponse>().await.ok().map(|body| body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Persist the post-registration role choice via
/// `POST /api/auth/update-user-type`.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one on transport
/// failures.
pub async fn update_user_type(token: &str, user_id: i64, user_type: UserType) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = UpdateUserTypeRequest { user_id, user_type };
        let resp = gloo_net::http::Request::post(&endpoint("/api/auth/update-user-type"))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(
                resp.status(),
                &body,
                "failed to update user type",
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id, user_type);
        Err("not available on server".to_owned())
    }
}

/// Submit a track for analysis via `POST /api/music/analyze`.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one on transport
/// failures.
pub async fn analyze(req: &AnalyzeRequest) -> Result<AnalyzeResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/music/analyze"))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(
                resp.status(),
                &body,
                "failed to analyze music",
            ));
        }
        resp.json::<AnalyzeResponse>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Send similarity feedback via `POST /api/music/feedback`.
/// Best-effort telemetry; callers log failures and move on.
///
/// # Errors
///
/// Returns the backend's error message, or a generic one on transport
/// failures.
pub async fn send_feedback(token: &str, req: FeedbackRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/api/music/feedback"))
            .header("Authorization", &bearer(token))
            .json(&req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(
                resp.status(),
                &body,
                "failed to send feedback",
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        Err("not available on server".to_owned())
    }
}
