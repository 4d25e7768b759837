//! API resource management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};
use crate::patch::Patch;

use super::{DEFAULT_PAGE, DEFAULT_SIZE};

/// Endpoint group for managing API resources and their scopes.
///
/// Access via [`Client::resources`](crate::Client::resources).
#[derive(Clone)]
pub struct ResourcesApi {
    client: Client,
}

impl ResourcesApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists API resources, paged.
    pub fn list(&self) -> ListResourcesRequest {
        ListResourcesRequest {
            client: self.client.clone(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }

    /// Gets an API resource by id.
    pub async fn get(&self, resource_id: impl AsRef<str>) -> Result<ApiResponse<ApiResource>> {
        let spec = RequestSpec::get(&["api", "resources", resource_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Creates an API resource.
    pub async fn create(&self, request: CreateResourceRequest) -> Result<ApiResponse<ApiResource>> {
        let spec = RequestSpec::post(&["api", "resources"])
            .json(&request)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Partially updates an API resource.
    ///
    /// Note that `scopes` replaces the whole scope list when present;
    /// there is no per-scope patch.
    pub async fn update(
        &self,
        resource_id: impl AsRef<str>,
        patch: ApiResourcePatch,
    ) -> Result<ApiResponse<ApiResource>> {
        let spec = RequestSpec::patch(&["api", "resources", resource_id.as_ref()])
            .json(&patch)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Deletes an API resource.
    pub async fn delete(&self, resource_id: impl AsRef<str>) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&["api", "resources", resource_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }
}

impl std::fmt::Debug for ResourcesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourcesApi").finish_non_exhaustive()
    }
}

/// An API resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResource {
    /// The resource id (e.g. `"res_abc123"`).
    pub id: String,
    /// The resource name used in token audiences.
    pub name: String,
    /// Display name shown on consent screens.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the resource may be requested.
    pub enabled: bool,
    /// Scopes exposed by the resource.
    #[serde(default)]
    pub scopes: Vec<ResourceScope>,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
}

/// A scope exposed by an API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceScope {
    /// The scope name (e.g. `"payments:read"`).
    pub name: String,
    /// Display name shown on consent screens.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the scope must always be granted with the resource.
    #[serde(default)]
    pub required: bool,
}

impl ResourceScope {
    /// Creates a scope with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            required: false,
        }
    }
}

/// Request to create an API resource.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    /// The resource name.
    pub name: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Initial scopes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<ResourceScope>,
}

impl CreateResourceRequest {
    /// Creates a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Adds a scope.
    #[must_use]
    pub fn with_scope(mut self, scope: ResourceScope) -> Self {
        self.scopes.push(scope);
        self
    }
}

/// Partial update for an API resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourcePatch {
    /// New display name; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub display_name: Patch<Option<String>>,
    /// New description; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<Option<String>>,
    /// Enable or disable the resource.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub enabled: Patch<bool>,
    /// Replacement scope list (atomic).
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub scopes: Patch<Vec<ResourceScope>>,
}

impl ApiResourcePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Patch::some(name.into());
        self
    }

    /// Clears the display name to null.
    #[must_use]
    pub fn clear_display_name(mut self) -> Self {
        self.display_name = Patch::null();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Patch::some(description.into());
        self
    }

    /// Enables or disables the resource.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Patch::value(enabled);
        self
    }

    /// Replaces the scope list.
    #[must_use]
    pub fn scopes(mut self, scopes: Vec<ResourceScope>) -> Self {
        self.scopes = Patch::value(scopes);
        self
    }
}

/// Request to list API resources.
pub struct ListResourcesRequest {
    client: Client,
    page: u32,
    size: u32,
}

impl ListResourcesRequest {
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

    async fn execute(self) -> Result<ApiResponse<Vec<ApiResource>>> {
        let spec = RequestSpec::get(&["api", "resources"])
            .query("page", self.page)
            .query("size", self.size)
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::future::IntoFuture for ListResourcesRequest {
    type Output = Result<ApiResponse<Vec<ApiResource>>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_list_replaces_atomically() {
        let patch = ApiResourcePatch::new().scopes(vec![ResourceScope::new("payments:read")]);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "scopes": [{"name": "payments:read", "displayName": null, "required": false}]
            })
        );
    }

    #[test]
    fn test_clear_display_name() {
        let patch = ApiResourcePatch::new().clear_display_name().enabled(true);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"displayName": null, "enabled": true})
        );
    }
}
