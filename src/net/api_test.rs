use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn error_from_body_prefers_backend_message() {
    let body = r#"{"error": "Invalid username or password"}"#;
    assert_eq!(
        error_from_body(401, body, "login failed"),
        "Invalid username or password"
    );
}

#[test]
fn error_from_body_falls_back_on_unparseable_body() {
    assert_eq!(
        error_from_body(502, "<html>Bad Gateway</html>", "login failed"),
        "login failed: 502"
    );
}

#[test]
fn error_from_body_falls_back_on_empty_message() {
    assert_eq!(
        error_from_body(500, r#"{"error": ""}"#, "registration failed"),
        "registration failed: 500"
    );
}

#[test]
fn vote_constants_match_wire_contract() {
    assert_eq!(VOTE_UP, 1);
    assert_eq!(VOTE_DOWN, -1);
}
