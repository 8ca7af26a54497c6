use super::*;

#[test]
fn api_base_url_falls_back_to_local_default() {
    assert_eq!(api_base_url(), "http://localhost:8080");
}

#[test]
fn endpoint_appends_path_to_base() {
    assert_eq!(
        endpoint("/api/auth/login"),
        "http://localhost:8080/api/auth/login"
    );
    assert_eq!(
        endpoint("/api/music/analyze"),
        "http://localhost:8080/api/music/analyze"
    );
}
