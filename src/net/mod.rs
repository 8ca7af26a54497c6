//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `types` defines the shared wire schema, and
//! `config` resolves the runtime-injected backend base URL.

pub mod api;
pub mod config;
pub mod types;
