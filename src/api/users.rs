//! User management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};
use crate::patch::Patch;

use super::{DEFAULT_PAGE, DEFAULT_SIZE};

/// Endpoint group for managing users.
///
/// Access via [`Client::users`](crate::Client::users).
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
/// use veridian::api::{AccountProtectionPatch, AuthenticationOptionsPatch, UserPatch};
///
/// // Block a user and require MFA, leaving every other field alone.
/// client.users()
///     .update("usr_1", UserPatch::new()
///         .blocked(true)
///         .account_protection(AccountProtectionPatch::new()
///             .authentication(AuthenticationOptionsPatch::new().require_mfa(true))))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct UsersApi {
    client: Client,
}

impl UsersApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists users, paged.
    pub fn list(&self) -> ListUsersRequest {
        ListUsersRequest {
            client: self.client.clone(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            search: None,
            sort: None,
        }
    }

    /// Gets a user by id.
    pub async fn get(&self, user_id: impl AsRef<str>) -> Result<ApiResponse<User>> {
        let spec = RequestSpec::get(&["api", "users", user_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Creates a user.
    pub async fn create(&self, request: CreateUserRequest) -> Result<ApiResponse<User>> {
        let spec = RequestSpec::post(&["api", "users"])
            .json(&request)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Partially updates a user.
    pub async fn update(
        &self,
        user_id: impl AsRef<str>,
        patch: UserPatch,
    ) -> Result<ApiResponse<User>> {
        let spec = RequestSpec::patch(&["api", "users", user_id.as_ref()])
            .json(&patch)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Deletes a user.
    pub async fn delete(&self, user_id: impl AsRef<str>) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&["api", "users", user_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }

    /// Updates the user's free-form claims.
    ///
    /// The map serializes through ordinary JSON object encoding, not the
    /// patch mechanism, and the server applies a merge with one
    /// documented convention: a key whose value is JSON `null` is
    /// **removed** server-side rather than stored as null. Keys not
    /// mentioned in the map are left untouched.
    ///
    /// ```rust,no_run
    /// # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
    /// let mut claims = serde_json::Map::new();
    /// claims.insert("department".into(), "engineering".into());
    /// claims.insert("legacy_role".into(), serde_json::Value::Null); // removed
    /// client.users().update_claims("usr_1", claims).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_claims(
        &self,
        user_id: impl AsRef<str>,
        claims: serde_json::Map<String, serde_json::Value>,
    ) -> Result<ApiResponse<User>> {
        let spec = RequestSpec::put(&["api", "users", user_id.as_ref(), "claims"])
            .json(&claims)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::fmt::Debug for UsersApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersApi").finish_non_exhaustive()
    }
}

/// A user as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user id (e.g. `"usr_abc123"`).
    pub id: String,
    /// The sign-in name.
    pub user_name: String,
    /// Primary email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the email address has been confirmed.
    #[serde(default)]
    pub email_confirmed: bool,
    /// Phone number.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Whether sign-in is blocked.
    #[serde(default)]
    pub blocked: bool,
    /// Whether a second factor is enrolled.
    #[serde(default)]
    pub two_factor_enabled: bool,
    /// Free-form claims.
    #[serde(default)]
    pub claims: serde_json::Map<String, serde_json::Value>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Last successful sign-in.
    #[serde(default)]
    pub last_sign_in: Option<DateTime<Utc>>,
}

/// Request to create a user.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// The sign-in name.
    pub user_name: String,
    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Initial password; when omitted the user must go through recovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Initial claims.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl CreateUserRequest {
    /// Creates a new request with the given sign-in name.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            ..Default::default()
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the initial password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Adds an initial claim.
    #[must_use]
    pub fn with_claim(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.claims.insert(key.into(), value.into());
        self
    }
}

/// Partial update for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New sign-in name.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_name: Patch<String>,
    /// New email address; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub email: Patch<Option<String>>,
    /// New phone number; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub phone_number: Patch<Option<String>>,
    /// Block or unblock sign-in.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub blocked: Patch<bool>,
    /// Nested account-protection settings; patches compose recursively.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub account_protection: Patch<AccountProtectionPatch>,
}

impl UserPatch {
    /// Creates an empty patch (all fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sign-in name.
    #[must_use]
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Patch::value(name.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Patch::some(email.into());
        self
    }

    /// Clears the email address to null.
    #[must_use]
    pub fn clear_email(mut self) -> Self {
        self.email = Patch::null();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Patch::some(phone.into());
        self
    }

    /// Clears the phone number to null.
    #[must_use]
    pub fn clear_phone_number(mut self) -> Self {
        self.phone_number = Patch::null();
        self
    }

    /// Blocks or unblocks sign-in.
    #[must_use]
    pub fn blocked(mut self, blocked: bool) -> Self {
        self.blocked = Patch::value(blocked);
        self
    }

    /// Sets the nested account-protection patch.
    #[must_use]
    pub fn account_protection(mut self, patch: AccountProtectionPatch) -> Self {
        self.account_protection = Patch::value(patch);
        self
    }
}

/// Partial update for a user's account-protection settings.
///
/// Nested inside [`UserPatch`]; its own fields follow the same
/// tri-state rules, so an all-absent inner patch still emits as `{}`
/// when the outer field is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProtectionPatch {
    /// Enable or disable lockout after failed sign-ins.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub lockout_enabled: Patch<bool>,
    /// Failed attempts before lockout.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub max_failed_attempts: Patch<u32>,
    /// Nested authentication options.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub authentication: Patch<AuthenticationOptionsPatch>,
}

impl AccountProtectionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables lockout.
    #[must_use]
    pub fn lockout_enabled(mut self, enabled: bool) -> Self {
        self.lockout_enabled = Patch::value(enabled);
        self
    }

    /// Sets the failed-attempt limit.
    #[must_use]
    pub fn max_failed_attempts(mut self, attempts: u32) -> Self {
        self.max_failed_attempts = Patch::value(attempts);
        self
    }

    /// Sets the nested authentication-options patch.
    #[must_use]
    pub fn authentication(mut self, patch: AuthenticationOptionsPatch) -> Self {
        self.authentication = Patch::value(patch);
        self
    }
}

/// Partial update for a user's authentication options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationOptionsPatch {
    /// Require a second factor at sign-in.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub require_mfa: Patch<bool>,
    /// Replacement list of allowed authentication methods.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub allowed_methods: Patch<Vec<String>>,
}

impl AuthenticationOptionsPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires or waives a second factor.
    #[must_use]
    pub fn require_mfa(mut self, required: bool) -> Self {
        self.require_mfa = Patch::value(required);
        self
    }

    /// Replaces the allowed authentication methods.
    #[must_use]
    pub fn allowed_methods(mut self, methods: Vec<String>) -> Self {
        self.allowed_methods = Patch::value(methods);
        self
    }
}

/// Request to list users.
pub struct ListUsersRequest {
    client: Client,
    page: u32,
    size: u32,
    search: Option<String>,
    sort: Option<String>,
}

impl ListUsersRequest {
    /// Sets the page to fetch (1-based).
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Filters by a free-text search term.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Sorts by the given field, e.g. `"userName"` or `"-createdAt"`.
    #[must_use]
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    async fn execute(self) -> Result<ApiResponse<Vec<User>>> {
        let spec = RequestSpec::get(&["api", "users"])
            .query("page", self.page)
            .query("size", self.size)
            .query_opt("search", self.search)
            .query_opt("sort", self.sort)
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::future::IntoFuture for ListUsersRequest {
    type Output = Result<ApiResponse<Vec<User>>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}


#[cfg(test)]
mod wiremock_tests {
    use super::*;
    use crate::auth::Credentials;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_update_nested_patch_on_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/users/usr_1"))
            .and(body_json(serde_json::json!({
                "blocked": true,
                "accountProtection": {"authentication": {"requireMfa": true}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "usr_1",
                "userName": "alice",
                "blocked": true,
                "createdAt": "2026-01-15T10:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = Client::builder()
            .url(server.uri())
            .credentials(Credentials::bearer("token"))
            .build()
            .unwrap();

        let response = client
            .users()
            .update(
                "usr_1",
                UserPatch::new().blocked(true).account_protection(
                    AccountProtectionPatch::new()
                        .authentication(AuthenticationOptionsPatch::new().require_mfa(true)),
                ),
            )
            .await
            .unwrap();
        assert!(response.body().blocked);
    }
}
