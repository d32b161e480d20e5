//! Tests for the default HTTP transport.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{HttpTransport, Transport};
use reqwest::Method;

fn no_data() -> Vec<(String, String)> {
    Vec::new()
}

fn auth_headers() -> Vec<(String, String)> {
    vec![("Authorization".to_string(), "Client-ID abc".to_string())]
}

#[tokio::test]
async fn get_returns_body_and_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/ping", mock_server.uri());
    let response = tokio::task::spawn_blocking(move || {
        HttpTransport::new().request(Method::GET, &uri, &no_data(), &no_data())
    })
    .await
    .unwrap()
    .unwrap();

    assert!(response.is_success());
    assert_eq!(response.body, "pong");
}

#[tokio::test]
async fn non_success_status_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/missing", mock_server.uri());
    let response = tokio::task::spawn_blocking(move || {
        HttpTransport::new().request(Method::GET, &uri, &no_data(), &no_data())
    })
    .await
    .unwrap()
    .unwrap();

    // The transport reports the status; classification is the caller's job
    assert!(!response.is_success());
    assert_eq!(response.status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(response.body, "gone");
}

#[tokio::test]
async fn sends_given_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/secure"))
        .and(header("Authorization", "Client-ID abc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/secure", mock_server.uri());
    let response = tokio::task::spawn_blocking(move || {
        HttpTransport::new().request(Method::GET, &uri, &no_data(), &auth_headers())
    })
    .await
    .unwrap()
    .unwrap();

    assert!(response.is_success(), "Header should match the mock");
}

#[tokio::test]
async fn post_sends_multipart_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/upload", mock_server.uri());
    let data = vec![
        ("image".to_string(), "aGVsbG8=".to_string()),
        ("title".to_string(), "cat".to_string()),
    ];
    tokio::task::spawn_blocking(move || {
        HttpTransport::new().request(Method::POST, &uri, &data, &no_data())
    })
    .await
    .unwrap()
    .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"image\""));
    assert!(body.contains("aGVsbG8="));
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("cat"));
}

#[tokio::test]
async fn get_with_empty_data_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/plain", mock_server.uri());
    tokio::task::spawn_blocking(move || {
        HttpTransport::new().request(Method::GET, &uri, &no_data(), &no_data())
    })
    .await
    .unwrap()
    .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}
