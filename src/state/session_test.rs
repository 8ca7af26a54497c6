use super::*;

fn sample_user() -> User {
    User {
        id: 7,
        username: "ada".to_owned(),
        email: "ada@example.com".to_owned(),
        user_type: crate::net::types::UserType::Listener,
        avatar_url: None,
        auth_provider: "local".to_owned(),
    }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_not_authenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn login_sets_token_and_user_together() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), sample_user());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(sample_user()));
}

#[test]
fn clear_removes_token_and_user_together() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), sample_user());
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn login_overwrites_previous_session() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), sample_user());

    let mut other = sample_user();
    other.id = 8;
    other.username = "lin".to_owned();
    state.login("tok-2".to_owned(), other.clone());

    assert_eq!(state.token.as_deref(), Some("tok-2"));
    assert_eq!(state.user, Some(other));
}

#[test]
fn login_after_clear_matches_fresh_login() {
    let mut recycled = SessionState::default();
    recycled.login("old".to_owned(), sample_user());
    recycled.clear();
    recycled.login("tok-1".to_owned(), sample_user());

    let mut fresh = SessionState::default();
    fresh.login("tok-1".to_owned(), sample_user());

    assert_eq!(recycled, fresh);
}

#[test]
fn authenticated_implies_user_present() {
    let mut state = SessionState::default();
    state.login("tok-1".to_owned(), sample_user());
    assert_eq!(state.is_authenticated(), state.user.is_some());
    state.clear();
    assert_eq!(state.is_authenticated(), state.user.is_some());
}
