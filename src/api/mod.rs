//! Endpoint groups for the Veridian API.
//!
//! Each group is a thin wrapper that builds a request descriptor and
//! delegates to the shared pipeline:
//!
//! - Client registrations (OAuth/OIDC applications)
//! - Users (including claims and account protection)
//! - Groups and their members
//! - API resources and scopes
//! - Trust stores and certificates
//! - Tenant branding
//! - Audit logs (read-only)
//!
//! ## API hierarchy
//!
//! ```rust,no_run
//! # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
//! // List users, paged
//! let users = client.users().list().page(2).size(25).await?;
//! println!("total: {:?}", users.page().map(|p| p.total_count));
//!
//! // Partial update: set one field, clear another, leave the rest alone
//! use veridian::api::ClientPatch;
//! client.clients()
//!     .update("cli_1", ClientPatch::new().enabled(false).clear_description())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod branding;
mod clients;
mod groups;
mod logs;
mod resources;
mod trust_stores;
mod users;

pub use branding::{BrandingApi, Theme, ThemePatch};
pub use clients::{ClientPatch, ClientsApi, CreateClientRequest, ListClientsRequest, OidcClient};
pub use groups::{CreateGroupRequest, Group, GroupPatch, GroupsApi, ListGroupsRequest};
pub use logs::{ListLogsRequest, LogEntry, LogLevel, LogsApi};
pub use resources::{
    ApiResource, ApiResourcePatch, CreateResourceRequest, ListResourcesRequest, ResourceScope,
    ResourcesApi,
};
pub use trust_stores::{AddCertificateRequest, Certificate, TrustStore, TrustStoresApi};
pub use users::{
    AccountProtectionPatch, AuthenticationOptionsPatch, CreateUserRequest, ListUsersRequest, User,
    UserPatch, UsersApi,
};

/// Default page number applied by list endpoints when the caller does
/// not choose one. Paging defaults live in this layer, never in the
/// pipeline.
pub(crate) const DEFAULT_PAGE: u32 = 1;

/// Default page size applied by list endpoints.
pub(crate) const DEFAULT_SIZE: u32 = 10;
