use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  ada  ", "secret"),
        Ok(("ada".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("ada", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords are never trimmed; leading/trailing spaces are significant.
    assert_eq!(
        validate_login_input("ada", " spaced "),
        Ok(("ada".to_owned(), " spaced ".to_owned()))
    );
}
