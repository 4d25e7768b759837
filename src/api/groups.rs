//! Group management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};
use crate::patch::Patch;

use super::{DEFAULT_PAGE, DEFAULT_SIZE};

/// Endpoint group for managing user groups.
///
/// Access via [`Client::groups`](crate::Client::groups).
#[derive(Clone)]
pub struct GroupsApi {
    client: Client,
}

impl GroupsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists groups, paged.
    pub fn list(&self) -> ListGroupsRequest {
        ListGroupsRequest {
            client: self.client.clone(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            search: None,
        }
    }

    /// Gets a group by id.
    pub async fn get(&self, group_id: impl AsRef<str>) -> Result<ApiResponse<Group>> {
        let spec = RequestSpec::get(&["api", "groups", group_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Creates a group.
    pub async fn create(&self, request: CreateGroupRequest) -> Result<ApiResponse<Group>> {
        let spec = RequestSpec::post(&["api", "groups"])
            .json(&request)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Partially updates a group.
    pub async fn update(
        &self,
        group_id: impl AsRef<str>,
        patch: GroupPatch,
    ) -> Result<ApiResponse<Group>> {
        let spec = RequestSpec::patch(&["api", "groups", group_id.as_ref()])
            .json(&patch)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Deletes a group.
    pub async fn delete(&self, group_id: impl AsRef<str>) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&["api", "groups", group_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }

    /// Adds a user to the group.
    pub async fn add_member(
        &self,
        group_id: impl AsRef<str>,
        user_id: impl AsRef<str>,
    ) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::put(&[
            "api",
            "groups",
            group_id.as_ref(),
            "members",
            user_id.as_ref(),
        ])
        .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }

    /// Removes a user from the group.
    pub async fn remove_member(
        &self,
        group_id: impl AsRef<str>,
        user_id: impl AsRef<str>,
    ) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&[
            "api",
            "groups",
            group_id.as_ref(),
            "members",
            user_id.as_ref(),
        ])
        .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }
}

impl std::fmt::Debug for GroupsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupsApi").finish_non_exhaustive()
    }
}

/// A group as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// The group id (e.g. `"grp_abc123"`).
    pub id: String,
    /// The group name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of members.
    #[serde(default)]
    pub member_count: u64,
    /// When the group was created.
    pub created_at: DateTime<Utc>,
}

/// Request to create a group.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// The group name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateGroupRequest {
    /// Creates a new request with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPatch {
    /// New group name.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    /// New description; clearable.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<Option<String>>,
}

impl GroupPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the group name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::value(name.into());
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
}

/// Request to list groups.
pub struct ListGroupsRequest {
    client: Client,
    page: u32,
    size: u32,
    search: Option<String>,
}

impl ListGroupsRequest {
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

    async fn execute(self) -> Result<ApiResponse<Vec<Group>>> {
        let spec = RequestSpec::get(&["api", "groups"])
            .query("page", self.page)
            .query("size", self.size)
            .query_opt("search", self.search)
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::future::IntoFuture for ListGroupsRequest {
    type Output = Result<ApiResponse<Vec<Group>>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}
