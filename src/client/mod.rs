//! Client types for connecting to the Veridian API.
//!
//! [`Client`] is the single entry point. It owns the request pipeline
//! (base URL, HTTP connection pool, credential material) and hands out
//! endpoint groups (`clients()`, `users()`, `groups()` and so on) that
//! all delegate to that one pipeline by composition. There is no
//! per-endpoint transport code anywhere.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use veridian::{Client, Credentials};
//!
//! # async fn run() -> Result<(), veridian::Error> {
//! let client = Client::builder()
//!     .url("https://id.example.com")
//!     .credentials(Credentials::bearer("access-token"))
//!     .build()?;
//!
//! let users = client.users().list().search("alice").await?;
//! for user in users.body() {
//!     println!("{}: {}", user.id, user.user_name);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod inner;

pub use builder::ClientBuilder;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::api::{
    BrandingApi, ClientsApi, GroupsApi, LogsApi, ResourcesApi, TrustStoresApi, UsersApi,
};
use crate::auth::Credentials;
use crate::http::Pipeline;

/// The Veridian SDK client.
///
/// ## Thread safety
///
/// `Client` is `Clone` and thread-safe: clones share one connection pool
/// and credential slot, and calls may be issued concurrently without any
/// coordination; the pipeline holds no locks across calls.
///
/// ## Cancellation
///
/// [`with_cancellation`](Client::with_cancellation) returns a handle
/// whose calls are raced against the given token; a cancelled call fails
/// with [`ErrorKind::Cancelled`](crate::ErrorKind::Cancelled) and no
/// retry is ever scheduled.
#[derive(Clone)]
pub struct Client {
    inner: Arc<inner::ClientInner>,
    cancel: Option<CancellationToken>,
}

impl Client {
    /// Creates a new client builder.
    pub fn builder() -> ClientBuilder<builder::NoUrl, builder::NoCredentials> {
        ClientBuilder::new()
    }

    /// Returns the endpoint group for OAuth/OIDC client registrations.
    pub fn clients(&self) -> ClientsApi {
        ClientsApi::new(self.clone())
    }

    /// Returns the endpoint group for users.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Returns the endpoint group for groups.
    pub fn groups(&self) -> GroupsApi {
        GroupsApi::new(self.clone())
    }

    /// Returns the endpoint group for API resources.
    pub fn resources(&self) -> ResourcesApi {
        ResourcesApi::new(self.clone())
    }

    /// Returns the endpoint group for trust stores.
    pub fn trust_stores(&self) -> TrustStoresApi {
        TrustStoresApi::new(self.clone())
    }

    /// Returns the endpoint group for tenant branding.
    pub fn branding(&self) -> BrandingApi {
        BrandingApi::new(self.clone())
    }

    /// Returns the endpoint group for audit logs.
    pub fn logs(&self) -> LogsApi {
        LogsApi::new(self.clone())
    }

    /// Returns a handle whose calls are cancelled when `token` fires.
    ///
    /// The handle shares the underlying connection pool; only the
    /// cancellation scope differs.
    ///
    /// ```rust,no_run
    /// # use veridian::Client;
    /// use veridian::CancellationToken;
    ///
    /// # async fn run(client: Client) -> Result<(), veridian::Error> {
    /// let token = CancellationToken::new();
    /// let scoped = client.with_cancellation(token.clone());
    ///
    /// // Elsewhere: token.cancel() aborts any in-flight call on `scoped`.
    /// let user = scoped.users().get("usr_1").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    /// Replaces the credential material, e.g. after a token refresh.
    pub fn set_credentials(&self, credentials: impl Into<Credentials>) {
        self.inner.pipeline.set_credentials(credentials.into());
    }

    /// Returns the base URL of the client.
    pub fn url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    pub(crate) fn from_inner(inner: inner::ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
            cancel: None,
        }
    }

    pub(crate) fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }

    /// The cancellation token scoped to this handle, if any.
    pub(crate) fn cancellation(&self) -> Option<CancellationToken> {
        self.cancel.clone()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> Client {
        Client::builder()
            .url("https://id.example.com")
            .credentials(Credentials::bearer("token"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_url() {
        assert_eq!(test_client().url(), "https://id.example.com/");
    }

    #[test]
    fn test_with_cancellation_shares_inner() {
        let client = test_client();
        let scoped = client.with_cancellation(CancellationToken::new());
        assert!(scoped.cancellation().is_some());
        assert!(client.cancellation().is_none());
        assert!(Arc::ptr_eq(&client.inner, &scoped.inner));
    }

    #[test]
    fn test_debug_omits_credentials() {
        let debug = format!("{:?}", test_client());
        assert!(!debug.contains("token"));
    }
}
