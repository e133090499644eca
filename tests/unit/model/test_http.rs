use bigcommerce_client::model::codec::SerdeJsonCodec;
use bigcommerce_client::model::http::{
    ResponseOutcome, TransportResponse, Verb, build_request_descriptor, classify_response,
    normalize_endpoint,
};
use reqwest::header::HeaderValue;
use reqwest::{Method, StatusCode};
use serde_json::json;

const BASE: &str = "https://api.bigcommerce.com/stores/abc123/v3/catalog";

#[test]
fn test_normalize_with_and_without_slash() {
    assert_eq!(normalize_endpoint("products"), normalize_endpoint("/products"));
    assert_eq!(normalize_endpoint("products"), "/products");
}

#[test]
fn test_normalize_strips_at_most_one_slash() {
    for endpoint in ["a", "/a", "//a", "products/1/modifiers", ""] {
        let normalized = normalize_endpoint(endpoint);
        let stripped = endpoint.strip_prefix('/').unwrap_or(endpoint);
        assert_eq!(normalized, format!("/{stripped}"));
        assert_eq!(normalize_endpoint(&normalized), normalized);
    }
}

#[test]
fn test_verb_methods() {
    assert_eq!(Method::from(Verb::Get), Method::GET);
    assert_eq!(Method::from(Verb::Put), Method::PUT);
    assert_eq!(Method::from(Verb::Post), Method::POST);
    assert_eq!(Method::from(Verb::Delete), Method::DELETE);
    assert_eq!(Verb::Delete.to_string(), "DELETE");
    assert!(Verb::Put.carries_body());
    assert!(!Verb::Get.carries_body());
}

#[test]
fn test_headers_identical_across_verbs() {
    let body = json!({"name": "Mug"});
    let descriptors: Vec<_> = [Verb::Get, Verb::Put, Verb::Post, Verb::Delete]
        .into_iter()
        .map(|verb| {
            build_request_descriptor(
                BASE,
                "client-42",
                "token with spaces",
                verb,
                "products/1",
                Some(&body),
                &SerdeJsonCodec,
            )
            .unwrap()
        })
        .collect();

    for descriptor in &descriptors {
        assert_eq!(descriptor.headers, descriptors[0].headers);
        assert_eq!(descriptor.url, format!("{BASE}/products/1"));
    }
    assert_eq!(descriptors[0].headers["X-Auth-Token"], "token with spaces");
    assert!(descriptors[0].body.is_none());
    assert!(descriptors[1].body.is_some());
    assert!(descriptors[2].body.is_some());
    assert!(descriptors[3].body.is_none());
}

#[test]
fn test_classify_throttled_uses_header_plus_margin() {
    let mut response = TransportResponse::new(StatusCode::TOO_MANY_REQUESTS, "");
    response
        .headers
        .insert("x-retry-after", HeaderValue::from_static("3"));

    let outcome = classify_response(Ok(response), &SerdeJsonCodec, 2);

    assert_eq!(outcome, ResponseOutcome::Throttled(5));
}

#[test]
fn test_classify_only_exact_200_is_success() {
    for status in [StatusCode::CREATED, StatusCode::ACCEPTED, StatusCode::NO_CONTENT] {
        let outcome = classify_response(
            Ok(TransportResponse::new(status, "{}")),
            &SerdeJsonCodec,
            2,
        );
        match outcome {
            ResponseOutcome::Failure(err) => assert!(err.is_remote()),
            other => panic!("Unexpected outcome for {status}: {other:?}"),
        }
    }
}
