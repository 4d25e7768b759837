//! Common test harness for Veridian Rust SDK integration tests.

use veridian::{Client, Credentials};
use wiremock::MockServer;

/// Builds a client pointed at the given mock server with a bearer token.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .url(server.uri())
        .credentials(Credentials::bearer("test-token"))
        .build()
        .expect("client should build against a mock server URI")
}

/// Serialized `x-pagination` header value in the server's wire shape.
pub fn pagination_header(
    page_size: u32,
    current_page: u32,
    total_count: u64,
    has_next: bool,
) -> String {
    serde_json::json!({
        "pageSize": page_size,
        "currentPage": current_page,
        "totalCount": total_count,
        "hasPrevious": current_page > 1,
        "hasNext": has_next,
    })
    .to_string()
}

/// A minimal user document the SDK can decode.
pub fn user_body(id: &str, user_name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "userName": user_name,
        "emailConfirmed": false,
        "blocked": false,
        "createdAt": "2026-01-15T10:30:00Z",
    })
}
