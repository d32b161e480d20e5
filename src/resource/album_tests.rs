//! Tests for the album resource.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{create_fields, Album, AlbumOptions};
use crate::cache::NullCache;
use crate::client::ImgurClient;
use crate::error::ImgurError;
use crate::resource::Resource;

fn album_response_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": id,
            "title": "My album",
            "privacy": "hidden",
            "images_count": 2
        },
        "success": true,
        "status": 200
    })
}

#[test]
fn fetch_without_client_fails_with_no_client() {
    let mut album = Album::new();
    let result = album.fetch("abc").map(|_| ());
    assert!(matches!(result, Err(ImgurError::NoClient)));
    assert!(album.fields().is_empty());
}

#[test]
fn create_without_client_fails_with_no_client() {
    let mut album = Album::new();
    let result = album.create(&AlbumOptions::default()).map(|_| ());
    assert!(matches!(result, Err(ImgurError::NoClient)));
}

#[tokio::test]
async fn fetch_populates_fields_from_data_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/album/alb42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_response_json("alb42")))
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let album = tokio::task::spawn_blocking(move || {
        let client = ImgurClient::with_client("my-app", "")
            .endpoint(endpoint)
            .cache(NullCache);
        let mut album = client.album();
        album.fetch("alb42")?;
        Ok::<Album, ImgurError>(album)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(album.id(), Some("alb42"));
    assert_eq!(
        album.field("title").and_then(|v| v.as_str()),
        Some("My album")
    );
    assert_eq!(
        album.field("images_count").and_then(|v| v.as_u64()),
        Some(2)
    );
}

#[test]
fn create_fields_omit_empty_options() {
    let options = AlbumOptions {
        title: "My album".to_string(),
        ..Default::default()
    };
    let fields = create_fields(&options);

    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["title"]);
}

#[test]
fn create_fields_include_all_supplied_options() {
    let options = AlbumOptions {
        ids: "abc,def".to_string(),
        title: "My album".to_string(),
        description: "vacation shots".to_string(),
        privacy: "hidden".to_string(),
        cover: "abc".to_string(),
    };
    let fields = create_fields(&options);

    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["ids", "title", "description", "privacy", "cover"]);
}

#[test]
fn create_fields_can_be_empty() {
    assert!(create_fields(&AlbumOptions::default()).is_empty());
}

#[tokio::test]
async fn create_posts_form_and_populates_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3/album"))
        .respond_with(ResponseTemplate::new(200).set_body_json(album_response_json("alb42")))
        .mount(&mock_server)
        .await;

    let endpoint = mock_server.uri();
    let album = tokio::task::spawn_blocking(move || {
        let client = ImgurClient::with_client("my-app", "")
            .endpoint(endpoint)
            .cache(NullCache);
        let mut album = client.album();
        let options = AlbumOptions {
            ids: "abc,def".to_string(),
            title: "My album".to_string(),
            ..Default::default()
        };
        album.create(&options)?;
        Ok::<Album, ImgurError>(album)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(album.id(), Some("alb42"));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"ids\""));
    assert!(body.contains("abc,def"));
    assert!(body.contains("name=\"title\""));
    assert!(!body.contains("name=\"privacy\""));
    assert!(!body.contains("name=\"cover\""));
}
