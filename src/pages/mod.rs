//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, requests, session
//! transitions, navigation) and delegates shared rendering to `components`.

pub mod auth_callback;
pub mod home;
pub mod landing;
pub mod login;
pub mod register;
pub mod select_user_type;
pub mod upload;
