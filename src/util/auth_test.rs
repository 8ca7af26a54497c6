use super::*;
use crate::net::types::{User, UserType};

#[test]
fn redirects_when_no_token_was_ever_set() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn redirects_after_logout_clears_the_token() {
    let mut state = SessionState::default();
    state.login(
        "tok".to_owned(),
        User {
            id: 1,
            username: "ada".to_owned(),
            email: String::new(),
            user_type: UserType::Listener,
            avatar_url: None,
            auth_provider: "local".to_owned(),
        },
    );
    state.clear();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn does_not_redirect_while_authenticated() {
    let mut state = SessionState::default();
    state.login(
        "tok".to_owned(),
        User {
            id: 1,
            username: "ada".to_owned(),
            email: String::new(),
            user_type: UserType::Artist,
            avatar_url: None,
            auth_provider: "google".to_owned(),
        },
    );
    assert!(!should_redirect_unauth(&state));
}
