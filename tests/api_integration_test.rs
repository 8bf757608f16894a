use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use number_classifier::{router, NumberClassifier, NumbersApiClient};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const FALLBACK: &str = "No fun fact available.";

fn app_for(base_url: &str, timeout: Duration) -> axum::Router {
    let client = NumbersApiClient::new(base_url, timeout, FALLBACK).unwrap();
    router(NumberClassifier::new(Arc::new(client)))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_classify_perfect_number_end_to_end() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET).path("/6/math");
        then.status(200)
            .body("6 is the smallest perfect number.");
    });

    let app = app_for(&server.url(""), Duration::from_secs(5));
    let (status, body) = get_json(app, "/api/classify-number?number=6").await;

    fact_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "number": 6,
            "is_prime": false,
            "is_perfect": true,
            "properties": ["even", "armstrong"],
            "digit_sum": 6,
            "fun_fact": "6 is the smallest perfect number."
        })
    );
}

#[tokio::test]
async fn test_multi_digit_number_is_not_armstrong() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/28/math");
        then.status(200).body("28 is the second perfect number.");
    });

    let app = app_for(&server.url(""), Duration::from_secs(5));
    let (status, body) = get_json(app, "/api/classify-number?number=28").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "number": 28,
            "is_prime": false,
            "is_perfect": true,
            "properties": ["even"],
            "digit_sum": 10,
            "fun_fact": "28 is the second perfect number."
        })
    );
}

#[tokio::test]
async fn test_numbers_above_signed_range_are_classified() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/10000000000000000000/math");
        then.status(200).body("10^19.");
    });

    let app = app_for(&server.url(""), Duration::from_secs(5));
    let (status, body) =
        get_json(app, "/api/classify-number?number=10000000000000000000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 10_000_000_000_000_000_000u64);
    assert_eq!(body["is_prime"], false);
    assert_eq!(body["is_perfect"], false);
    assert_eq!(body["properties"], serde_json::json!(["even"]));
    assert_eq!(body["digit_sum"], 1);
}

#[tokio::test]
async fn test_classify_armstrong_prime() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/7/math");
        then.status(200).body("7 is prime.");
    });

    let app = app_for(&server.url(""), Duration::from_secs(5));
    let (status, body) = get_json(app, "/api/classify-number?number=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_prime"], true);
    assert_eq!(body["properties"], serde_json::json!(["odd", "armstrong"]));
}

#[tokio::test]
async fn test_upstream_timeout_still_returns_ok() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET).path("/28/math");
        then.status(200)
            .delay(Duration::from_secs(2))
            .body("too late");
    });

    let app = app_for(&server.url(""), Duration::from_millis(200));
    let (status, body) = get_json(app, "/api/classify-number?number=28").await;

    fact_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], FALLBACK);
    assert_eq!(body["is_perfect"], true);
}

#[tokio::test]
async fn test_upstream_error_status_still_returns_ok() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/10/math");
        then.status(503);
    });

    let app = app_for(&server.url(""), Duration::from_secs(5));
    let (status, body) = get_json(app, "/api/classify-number?number=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], FALLBACK);
}

#[tokio::test]
async fn test_invalid_inputs_return_bad_request() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("unused");
    });

    let cases = [
        ("/api/classify-number?number=-5", "-5"),
        ("/api/classify-number?number=abc", "abc"),
        ("/api/classify-number?number=", ""),
        ("/api/classify-number", ""),
        ("/api/classify-number?number=6&number=7", "6,7"),
        ("/api/classify-number?number=18446744073709551616", "18446744073709551616"),
    ];

    for (uri, echoed) in cases {
        let app = app_for(&server.url(""), Duration::from_secs(5));
        let (status, body) = get_json(app, uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_eq!(
            body,
            serde_json::json!({"number": echoed, "error": true}),
            "uri: {}",
            uri
        );
    }

    fact_mock.assert_hits(0);
}

#[tokio::test]
async fn test_healthz() {
    let app = app_for("http://127.0.0.1:1", Duration::from_secs(1));

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}
