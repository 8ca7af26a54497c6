use super::*;

fn claims() -> TokenClaims {
    TokenClaims {
        user_id: 42,
        username: "test2".to_owned(),
    }
}

#[test]
fn fallback_user_carries_claim_identity() {
    let user = fallback_user(&claims());
    assert_eq!(user.id, 42);
    assert_eq!(user.username, "test2");
}

#[test]
fn fallback_user_defaults_unknown_fields() {
    let user = fallback_user(&claims());
    assert_eq!(user.email, "");
    assert_eq!(user.user_type, UserType::Listener);
    assert!(user.avatar_url.is_none());
}

#[test]
fn fallback_user_is_tagged_with_the_delegating_provider() {
    assert_eq!(fallback_user(&claims()).auth_provider, "google");
}
