//! OAuth/OIDC client registration management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};
use crate::patch::Patch;

use super::{DEFAULT_PAGE, DEFAULT_SIZE};

/// Endpoint group for managing client registrations.
///
/// Access via [`Client::clients`](crate::Client::clients).
///
/// ## Example
///
/// ```rust,no_run
/// # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
/// use veridian::api::{ClientPatch, CreateClientRequest};
///
/// let created = client.clients()
///     .create(CreateClientRequest::new("spa", "Single-page app")
///         .with_redirect_uri("https://app.example.com/callback"))
///     .await?;
///
/// // Disable it and clear the description in one PATCH.
/// client.clients()
///     .update(&created.body().client_id, ClientPatch::new()
///         .enabled(false)
///         .clear_description())
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientsApi {
    client: Client,
}

impl ClientsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists client registrations, paged.
    pub fn list(&self) -> ListClientsRequest {
        ListClientsRequest {
            client: self.client.clone(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            search: None,
        }
    }

    /// Gets a client registration by id.
    pub async fn get(&self, client_id: impl AsRef<str>) -> Result<ApiResponse<OidcClient>> {
        let spec = RequestSpec::get(&["api", "clients", client_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Creates a client registration.
    pub async fn create(&self, request: CreateClientRequest) -> Result<ApiResponse<OidcClient>> {
        let spec = RequestSpec::post(&["api", "clients"])
            .json(&request)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Partially updates a client registration.
    ///
    /// Only the fields made present on the patch are touched; everything
    /// else keeps its current value server-side.
    pub async fn update(
        &self,
        client_id: impl AsRef<str>,
        patch: ClientPatch,
    ) -> Result<ApiResponse<OidcClient>> {
        let spec = RequestSpec::patch(&["api", "clients", client_id.as_ref()])
            .json(&patch)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Deletes a client registration.
    pub async fn delete(&self, client_id: impl AsRef<str>) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&["api", "clients", client_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }
}

impl std::fmt::Debug for ClientsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientsApi").finish_non_exhaustive()
    }
}

/// A client registration as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcClient {
    /// The client id (e.g. `"cli_abc123"`).
    pub client_id: String,
    /// Human-readable client name.
    pub client_name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the client may authenticate.
    pub enabled: bool,
    /// Grant types the client may use.
    #[serde(default)]
    pub allowed_grant_types: Vec<String>,
    /// Registered redirect URIs.
    #[serde(default)]
    pub redirect_uris: Vec<String>,
    /// Whether PKCE is required on the authorization code flow.
    #[serde(default)]
    pub require_pkce: bool,
    /// When the registration was created.
    pub created_at: DateTime<Utc>,
    /// When the registration was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to create a client registration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    /// The client id.
    pub client_id: String,
    /// Human-readable client name.
    pub client_name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grant types the client may use.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_grant_types: Vec<String>,
    /// Registered redirect URIs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_uris: Vec<String>,
}

impl CreateClientRequest {
    /// Creates a new request with the given id and name.
    pub fn new(client_id: impl Into<String>, client_name: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_name: client_name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an allowed grant type.
    #[must_use]
    pub fn with_grant_type(mut self, grant_type: impl Into<String>) -> Self {
        self.allowed_grant_types.push(grant_type.into());
        self
    }

    /// Adds a redirect URI.
    #[must_use]
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uris.push(uri.into());
        self
    }
}

/// Partial update for a client registration.
///
/// Fields left untouched stay [`Patch::Absent`] and are omitted from the
/// request body entirely. `allowed_grant_types` is atomic: setting it
/// replaces the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    /// New client name.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub client_name: Patch<String>,
    /// New description; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<Option<String>>,
    /// Enable or disable the client.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub enabled: Patch<bool>,
    /// Replacement grant-type list.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub allowed_grant_types: Patch<Vec<String>>,
    /// Replacement redirect URI list.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub redirect_uris: Patch<Vec<String>>,
    /// Require PKCE on the authorization code flow.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub require_pkce: Patch<bool>,
}

impl ClientPatch {
    /// Creates an empty patch (all fields absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client name.
    #[must_use]
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Patch::value(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Patch::some(description.into());
        self
    }

    /// Clears the description to null.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Patch::null();
        self
    }

    /// Enables or disables the client.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Patch::value(enabled);
        self
    }

    /// Replaces the allowed grant types.
    #[must_use]
    pub fn allowed_grant_types(mut self, grant_types: Vec<String>) -> Self {
        self.allowed_grant_types = Patch::value(grant_types);
        self
    }

    /// Replaces the redirect URIs.
    #[must_use]
    pub fn redirect_uris(mut self, uris: Vec<String>) -> Self {
        self.redirect_uris = Patch::value(uris);
        self
    }

    /// Sets the PKCE requirement.
    #[must_use]
    pub fn require_pkce(mut self, required: bool) -> Self {
        self.require_pkce = Patch::value(required);
        self
    }
}

/// Request to list client registrations.
pub struct ListClientsRequest {
    client: Client,
    page: u32,
    size: u32,
    search: Option<String>,
}

impl ListClientsRequest {
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

    async fn execute(self) -> Result<ApiResponse<Vec<OidcClient>>> {
        let spec = RequestSpec::get(&["api", "clients"])
            .query("page", self.page)
            .query("size", self.size)
            .query_opt("search", self.search)
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::future::IntoFuture for ListClientsRequest {
    type Output = Result<ApiResponse<Vec<OidcClient>>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_wire_shape() {
        let patch = ClientPatch::new().enabled(false).clear_description();
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"description": null, "enabled": false})
        );
    }

    #[test]
    fn test_empty_patch_is_empty_object() {
        assert_eq!(serde_json::to_string(&ClientPatch::new()).unwrap(), "{}");
    }

    #[test]
    fn test_grant_types_replace_atomically() {
        let patch = ClientPatch::new()
            .allowed_grant_types(vec!["client_credentials".into()]);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"allowedGrantTypes": ["client_credentials"]})
        );
    }

    #[test]
    fn test_create_request_skips_empty_collections() {
        let request = CreateClientRequest::new("cli_1", "Console");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"clientId": "cli_1", "clientName": "Console"})
        );
    }
}
