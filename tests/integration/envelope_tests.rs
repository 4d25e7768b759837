//! Tests for the response envelope: paging metadata, headers, and
//! request cancellation as seen from the public API.

use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use veridian::ErrorKind;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, pagination_header, user_body};

#[tokio::test]
async fn test_paging_walk_follows_has_next() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_body("usr_1", "alice")]))
                .insert_header("x-pagination", pagination_header(1, 1, 2, true).as_str()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([user_body("usr_2", "bob")]))
                .insert_header("x-pagination", pagination_header(1, 2, 2, false).as_str()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut names = Vec::new();
    let mut page = 1;
    loop {
        let response = client.users().list().page(page).size(1).await.unwrap();
        names.extend(response.body().iter().map(|u| u.user_name.clone()));
        match response.page() {
            Some(descriptor) if descriptor.has_next => page = descriptor.current_page + 1,
            _ => break,
        }
    }
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn test_envelope_exposes_status_and_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/usr_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body("usr_1", "alice"))
                .insert_header("x-request-id", "req-42"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.users().get("usr_1").await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-42"
    );
    assert!(response.page().is_none());
}

#[tokio::test]
async fn test_unparseable_pagination_header_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("x-pagination", "{half a json object"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.users().list().await.unwrap();
    assert!(response.page().is_none());
}

#[tokio::test]
async fn test_cancellation_token_aborts_in_flight_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/usr_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body("usr_1", "alice"))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&server)
        .await;

    let token = CancellationToken::new();
    let client = client_for(&server).with_cancellation(token.clone());

    let cancel = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel.cancel();
    });

    let err = client.users().get("usr_1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.is_transport());
}
