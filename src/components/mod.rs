//! Shared view components used by multiple pages.

pub mod google_login_button;
pub mod song_item;
pub mod welcome_card;
