//! Runtime API configuration.
//!
//! The deployment injects `window.__APP_CONFIG__ = { API_BASE_URL: "..." }`
//! ahead of the bundle; local development falls back to the dev backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when no runtime config is injected.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Resolve the backend base URL from the injected runtime config.
pub fn api_base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        injected_base_url().unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DEFAULT_API_BASE_URL.to_owned()
    }
}

/// Build an absolute endpoint URL under the configured base.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base_url())
}

#[cfg(feature = "hydrate")]
fn injected_base_url() -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__APP_CONFIG__".into()).ok()?;
    if config.is_undefined() || config.is_null() {
        return None;
    }
    let url = js_sys::Reflect::get(&config, &"API_BASE_URL".into())
        .ok()?
        .as_string()?;
    if url.is_empty() { None } else { Some(url) }
}
