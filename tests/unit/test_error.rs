use bigcommerce_client::error::AppError;
use reqwest::StatusCode;

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("connector needs a non-empty host".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: connector needs a non-empty host"
    );
}

#[test]
fn test_app_error_display_transport() {
    let error = AppError::Transport("connection refused".to_string());
    assert_eq!(error.to_string(), "transport error: connection refused");
}

#[test]
fn test_app_error_display_remote() {
    let error = AppError::Remote {
        status: StatusCode::NOT_FOUND,
        body: r#"{"title":"Not Found"}"#.to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("Not Found"));
}

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded { attempts: 4 };
    assert_eq!(error.to_string(), "rate limit exceeded after 4 attempts");
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("key must be a string".to_string());
    assert_eq!(error.to_string(), "serialization error: key must be a string");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("missing field `id`".to_string());
    assert_eq!(error.to_string(), "deserialization error: missing field `id`");
}

#[test]
fn test_app_error_classification() {
    let remote = AppError::Remote {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
    };
    let malformed = AppError::MalformedPayload {
        body: "<html>".to_string(),
        reason: "expected value".to_string(),
    };
    let transport = AppError::Transport("timeout".to_string());

    assert!(remote.is_remote());
    assert!(malformed.is_remote());
    assert!(!transport.is_remote());
    assert!(transport.is_transport());
    assert_eq!(remote.body(), Some("boom"));
    assert_eq!(malformed.body(), Some("<html>"));
    assert_eq!(transport.body(), None);
}
