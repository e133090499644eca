use async_trait::async_trait;
use bigcommerce_client::prelude::*;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Always throttles the first call, then echoes the request body
#[derive(Default)]
struct EchoAfterThrottle {
    calls: Mutex<u32>,
}

#[async_trait]
impl Transport for EchoAfterThrottle {
    async fn execute(&self, request: &RequestDescriptor) -> Result<TransportResponse, AppError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls == 1 {
            let mut response = TransportResponse::new(StatusCode::TOO_MANY_REQUESTS, "");
            response
                .headers
                .insert("x-retry-after", "1".parse().unwrap());
            return Ok(response);
        }
        Ok(TransportResponse::new(
            StatusCode::OK,
            request.body.clone().unwrap_or_else(|| b"null".to_vec()),
        ))
    }
}

#[derive(Default)]
struct NoSleep {
    sleeps: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Timer for NoSleep {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

fn config() -> Config {
    Config::with_credentials(
        Credentials::new("abc123", "token", "client"),
        "https://api.bigcommerce.com",
    )
}

#[test]
fn test_custom_transport_and_timer() {
    let transport = Arc::new(EchoAfterThrottle::default());
    let timer = Arc::new(NoSleep::default());
    let connector = Connector::with_transport(config(), transport.clone())
        .unwrap()
        .with_timer(timer.clone());

    let echoed: Value = tokio_test::block_on(
        connector.replace("products/9", json!({"name": "Renamed"})),
    )
    .unwrap();

    assert_eq!(echoed, json!({"name": "Renamed"}));
    assert_eq!(*transport.calls.lock().unwrap(), 2);
    assert_eq!(*timer.sleeps.lock().unwrap(), vec![Duration::from_secs(3)]);
}

#[test]
fn test_request_descriptor_exposed_for_inspection() {
    let connector = Connector::new(config()).unwrap();
    let body = json!({"sku": "MUG-1"});

    let descriptor = connector
        .request_descriptor(Verb::Post, "products", Some(&body))
        .unwrap();

    assert_eq!(
        descriptor.url,
        "https://api.bigcommerce.com/stores/abc123/v3/catalog/products"
    );
    assert_eq!(descriptor.body.as_deref(), Some(&br#"{"sku":"MUG-1"}"#[..]));
}

#[test]
fn test_unserializable_body_is_rejected_before_any_request() {
    use std::collections::HashMap;

    let transport = Arc::new(EchoAfterThrottle::default());
    let connector = Connector::with_transport(config(), transport.clone()).unwrap();
    let mut body = HashMap::new();
    body.insert(vec![1u8], "tuple keys are not valid JSON object keys");

    let err = tokio_test::block_on(connector.create::<_, Value>("products", body)).unwrap_err();

    assert!(matches!(err, AppError::Serialization(_)));
    assert_eq!(*transport.calls.lock().unwrap(), 0);
}

#[test]
fn test_connector_debug_hides_token() {
    let connector = Connector::new(Config::with_credentials(
        Credentials::new("abc123", "very-secret", "client"),
        "https://api.bigcommerce.com",
    ))
    .unwrap();

    let debug = format!("{connector:?}");
    assert!(debug.contains("abc123"));
    assert!(!debug.contains("very-secret"));
}
