//! End-to-end resource lifecycle tests through the public API surface.

use serde_json::json;
use veridian::api::{CreateGroupRequest, CreateUserRequest, ThemePatch, UserPatch};
use veridian::{ErrorKind, Patch};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{client_for, user_body};

#[tokio::test]
async fn test_user_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({"userName": "alice", "email": "alice@example.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(user_body("usr_1", "alice")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/usr_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("usr_1", "alice")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/usr_1"))
        .and(body_json(json!({"email": null, "blocked": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("usr_1", "alice")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/usr_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .users()
        .create(CreateUserRequest::new("alice").with_email("alice@example.com"))
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);
    assert_eq!(created.body().id, "usr_1");

    let fetched = client.users().get("usr_1").await.unwrap();
    assert_eq!(fetched.body().user_name, "alice");

    let patch = UserPatch::new().clear_email().blocked(true);
    client.users().update("usr_1", patch).await.unwrap();

    let deleted = client.users().delete("usr_1").await.unwrap();
    assert_eq!(deleted.status().as_u16(), 204);
}

#[tokio::test]
async fn test_group_membership() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/groups"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "grp_1",
            "name": "admins",
            "createdAt": "2026-01-15T10:30:00Z",
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/groups/grp_1/members/usr_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/groups/grp_1/members/usr_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let group = client
        .groups()
        .create(CreateGroupRequest::new("admins"))
        .await
        .unwrap();
    client
        .groups()
        .add_member(&group.body().id, "usr_1")
        .await
        .unwrap();
    client
        .groups()
        .remove_member(&group.body().id, "usr_1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_branding_patch_clears_logo() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/branding/theme"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({"primaryColor": "#1a73e8", "logoUrl": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "primaryColor": "#1a73e8",
            "updatedAt": "2026-02-01T09:00:00Z",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let patch = ThemePatch {
        primary_color: Patch::value("#1a73e8".into()),
        logo_url: Patch::null(),
        ..Default::default()
    };
    let theme = client.branding().update(patch).await.unwrap();
    assert!(theme.body().logo_url.is_none());
}

#[tokio::test]
async fn test_validation_problem_reaches_the_caller() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "https://id.example.com/problems/validation",
            "title": "One or more validation errors occurred.",
            "status": 400,
            "errors": [
                {"code": "user_name_taken", "description": "The sign-in name is in use."}
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .users()
        .create(CreateUserRequest::new("alice"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.is_validation());
    let problem = err.validation_problem().unwrap();
    assert_eq!(problem.errors[0].code, "user_name_taken");
}
