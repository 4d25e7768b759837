//! Client builder with typestate pattern.

use std::{marker::PhantomData, time::Duration};

use url::Url;

use super::inner::ClientInner;
use crate::{
    auth::Credentials,
    config::{TlsConfig, DEFAULT_TIMEOUT},
    error::{Error, Result},
    http::Pipeline,
    Client,
};

/// Marker type: URL not yet provided.
pub struct NoUrl;

/// Marker type: URL has been provided.
pub struct HasUrl;

/// Marker type: credentials not yet provided.
pub struct NoCredentials;

/// Marker type: credentials have been provided.
pub struct HasCredentials;

/// Builder for creating [`Client`] instances.
///
/// Uses the typestate pattern to ensure required configuration (URL and
/// credentials) is provided at compile time.
///
/// ## Required configuration
///
/// - `url()`: the Veridian API endpoint
/// - `credentials()`: authentication credentials
///
/// ## Optional configuration
///
/// - `tls_config()`: custom TLS settings
/// - `timeout()`: per-request timeout (default 30s)
///
/// ## Example
///
/// ```rust
/// use veridian::{Client, Credentials};
///
/// let client = Client::builder()
///     .url("https://id.example.com")
///     .credentials(Credentials::bearer("access-token"))
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
/// # Ok::<(), veridian::Error>(())
/// ```
pub struct ClientBuilder<UrlState, CredentialsState> {
    url: Option<String>,
    credentials: Option<Credentials>,
    tls_config: TlsConfig,
    timeout: Duration,
    _url_state: PhantomData<UrlState>,
    _credentials_state: PhantomData<CredentialsState>,
}

impl ClientBuilder<NoUrl, NoCredentials> {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            url: None,
            credentials: None,
            tls_config: TlsConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl Default for ClientBuilder<NoUrl, NoCredentials> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ClientBuilder<NoUrl, C> {
    /// Sets the API base URL (e.g. `https://id.example.com`).
    pub fn url(self, url: impl Into<String>) -> ClientBuilder<HasUrl, C> {
        ClientBuilder {
            url: Some(url.into()),
            credentials: self.credentials,
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U> ClientBuilder<U, NoCredentials> {
    /// Sets the authentication credentials.
    ///
    /// Accepts anything convertible into [`Credentials`]; a plain string
    /// is treated as a bearer token.
    pub fn credentials(
        self,
        credentials: impl Into<Credentials>,
    ) -> ClientBuilder<U, HasCredentials> {
        ClientBuilder {
            url: self.url,
            credentials: Some(credentials.into()),
            tls_config: self.tls_config,
            timeout: self.timeout,
            _url_state: PhantomData,
            _credentials_state: PhantomData,
        }
    }
}

impl<U, C> ClientBuilder<U, C> {
    /// Sets the TLS configuration.
    #[must_use]
    pub fn tls_config(mut self, config: TlsConfig) -> Self {
        self.tls_config = config;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ClientBuilder<HasUrl, HasCredentials> {
    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let raw_url = self
            .url
            .ok_or_else(|| Error::configuration("base URL is required"))?;
        let credentials = self
            .credentials
            .ok_or_else(|| Error::configuration("credentials are required"))?;

        let base_url = Url::parse(&raw_url)
            .map_err(|e| Error::configuration(format!("invalid base URL: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "unsupported URL scheme: {}",
                base_url.scheme()
            )));
        }

        let pipeline = Pipeline::new(
            base_url.clone(),
            credentials,
            &self.tls_config,
            self.timeout,
        )?;

        Ok(Client::from_inner(ClientInner { base_url, pipeline }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_build() {
        let client = Client::builder()
            .url("https://id.example.com")
            .credentials(Credentials::bearer("token"))
            .build();
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_invalid_url() {
        let err = Client::builder()
            .url("not a url")
            .credentials(Credentials::None)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let err = Client::builder()
            .url("ftp://id.example.com")
            .credentials(Credentials::None)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_plain_string_is_bearer_token() {
        let client = Client::builder()
            .url("https://id.example.com")
            .credentials("raw-token")
            .build();
        assert!(client.is_ok());
    }
}
