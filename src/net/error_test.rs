use super::*;

#[test]
fn message_from_body_reads_string_message() {
    assert_eq!(
        message_from_body(r#"{"statusCode":401,"message":"Invalid credentials"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn message_from_body_joins_validation_messages() {
    let body = r#"{"message":["email must be an email","password is too short"]}"#;
    assert_eq!(
        message_from_body(body),
        Some("email must be an email, password is too short".to_owned())
    );
}

#[test]
fn message_from_body_ignores_blank_and_missing() {
    assert_eq!(message_from_body(r#"{"message":"   "}"#), None);
    assert_eq!(message_from_body(r#"{"message":[]}"#), None);
    assert_eq!(message_from_body(r#"{"error":"Bad Request"}"#), None);
    assert_eq!(message_from_body(r#"{"message":42}"#), None);
    assert_eq!(message_from_body("<html>502</html>"), None);
    assert_eq!(message_from_body(""), None);
}

#[test]
fn user_message_prefers_backend_message() {
    let err = ApiError::from_status(409, r#"{"message":"Username already taken"}"#);
    assert_eq!(err.user_message("Registration failed."), "Username already taken");
}

#[test]
fn user_message_falls_back_without_backend_message() {
    let fallback = "Login failed. Check your credentials.";
    assert_eq!(ApiError::from_status(500, "").user_message(fallback), fallback);
    assert_eq!(ApiError::Network("refused".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Decode("missing token".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Unavailable.user_message(fallback), fallback);
}

#[test]
fn display_includes_status() {
    assert_eq!(ApiError::from_status(404, "").to_string(), "request failed with status 404");
}
