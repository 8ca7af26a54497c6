use super::*;

#[test]
fn valid_input_builds_request() {
    let request =
        validate_register_input(" test2 ", "test2@example.com", "testtest", "testtest").unwrap();
    assert_eq!(request.username, "test2");
    assert_eq!(request.email, "test2@example.com");
    assert_eq!(request.password, "testtest");
    assert_eq!(request.confirm_password, "testtest");
}

#[test]
fn rejects_missing_fields() {
    assert_eq!(
        validate_register_input("", "a@b.com", "testtest", "testtest"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        validate_register_input("ada", "   ", "testtest", "testtest"),
        Err("Fill in all fields.")
    );
    assert_eq!(
        validate_register_input("ada", "a@b.com", "", ""),
        Err("Fill in all fields.")
    );
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_register_input("ada", "a@b.com", "short", "short"),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn rejects_mismatched_passwords() {
    assert_eq!(
        validate_register_input("ada", "a@b.com", "testtest", "testtest2"),
        Err("Passwords do not match.")
    );
}
