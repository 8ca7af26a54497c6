//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON exactly so serde handles the whole
//! boundary; unknown server fields are ignored and optional fields default,
//! which keeps the client tolerant of backend additions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User classification chosen once after registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Listener,
    Artist,
}

impl UserType {
    /// Wire value as sent in request bodies and shown in the UI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listener => "listener",
            Self::Artist => "artist",
        }
    }
}

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: UserType,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Identity provider that created the account (`"local"` or `"google"`).
    #[serde(default = "default_auth_provider")]
    pub auth_provider: String,
}

fn default_auth_provider() -> String {
    "local".to_owned()
}

/// Unverified claims carried in the token's payload segment.
///
/// Decoded client-side for display/fallback only; the token itself stays
/// opaque and the server re-validates it on every authorized request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenClaims {
    pub user_id: i64,
    pub username: String,
}

/// Response body of register and login.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Absent when the role is chosen in a later step.
    #[serde(default)]
    pub user: Option<User>,
}

/// Request body of `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Request body of `POST /api/auth/update-user-type`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateUserTypeRequest {
    pub user_id: i64,
    pub user_type: UserType,
}

/// Request body of `POST /api/music/analyze`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub title: String,
    pub artist_name: String,
    pub source_platform: String,
    pub added_by: i64,
}

/// Request body of `POST /api/music/feedback`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub query_song_id: i64,
    pub suggested_song_id: i64,
    /// `1` for thumbs up, `-1` for thumbs down.
    pub vote: i32,
}

/// The analyzed seed track echoed back by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist_name: String,
    #[serde(default)]
    pub source_platform: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One similarity match with its score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarSong {
    pub id: i64,
    pub title: String,
    pub artist_name: String,
    pub score: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response body of the analyze endpoint.
///
/// `similar_songs` keeps the server's ordering; the client never reorders
/// results.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub song: Song,
    #[serde(default)]
    pub similar_songs: Vec<SimilarSong>,
}
