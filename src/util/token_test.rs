use super::*;

fn make_token(payload: &str) -> String {
    format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn decodes_user_id_and_username() {
    let token = make_token(r#"{"user_id": 42, "username": "test2", "exp": 1999999999}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.username, "test2");
}

#[test]
fn rejects_token_without_three_segments() {
    assert!(decode_claims("just-a-string").is_none());
    assert!(decode_claims("two.segments").is_none());
    assert!(decode_claims("a.b.c.d").is_none());
    assert!(decode_claims("").is_none());
}

#[test]
fn rejects_payload_that_is_not_base64() {
    assert!(decode_claims("header.!!!not-base64!!!.signature").is_none());
}

#[test]
fn rejects_payload_that_is_not_claims_json() {
    let token = make_token(r#"{"unrelated": true}"#);
    assert!(decode_claims(&token).is_none());

    let not_json = format!("header.{}.signature", URL_SAFE_NO_PAD.encode("plain text"));
    assert!(decode_claims(&not_json).is_none());
}
