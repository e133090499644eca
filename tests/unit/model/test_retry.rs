use bigcommerce_client::model::retry::RetryConfig;
use std::time::Duration;

#[test]
fn test_retry_config_new() {
    let config = RetryConfig::new();
    assert_eq!(config.max_retries(), 0); // infinite
    assert_eq!(config.safety_margin_secs, 2);
    assert!(!config.exponential_backoff);
}

#[test]
fn test_retry_config_infinite_matches_default() {
    assert_eq!(RetryConfig::infinite(), RetryConfig::default());
}

#[test]
fn test_retry_config_with_max_retries() {
    let config = RetryConfig::with_max_retries(5);
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.safety_margin_secs, 2);
}

#[test]
fn test_retry_config_with_safety_margin() {
    let config = RetryConfig::infinite().with_safety_margin(0);
    assert_eq!(config.safety_margin_secs, 0);
    assert_eq!(config.delay_for(1, 3), Duration::from_secs(3));
}

#[test]
fn test_retry_config_with_exponential_backoff() {
    let config = RetryConfig::with_max_retries(10).with_exponential_backoff(60);
    assert!(config.exponential_backoff);
    assert_eq!(config.max_delay_secs, Some(60));
    assert_eq!(config.delay_for(1, 5), Duration::from_secs(5));
    assert_eq!(config.delay_for(5, 5), Duration::from_secs(60));
}

#[test]
fn test_retry_config_display_is_json() {
    let display = RetryConfig::infinite().to_string();
    assert!(display.contains("\"safety_margin_secs\":2"));
}
