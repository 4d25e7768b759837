//! Request dispatch and response classification.

use std::time::Duration;

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::Credentials;
use crate::config::TlsConfig;
use crate::error::{Error, ErrorKind, Result, ValidationProblem};

use super::envelope::{ApiResponse, PageDescriptor};
use super::request::RequestSpec;

/// Shared request pipeline.
///
/// One instance lives inside the client and is used by every endpoint
/// group. Each call is an independent, stateless operation: the pipeline
/// holds no locks across calls and serializes nothing between them; the
/// only mutable state is the refreshable credential slot.
pub(crate) struct Pipeline {
    http: reqwest::Client,
    base_url: Url,
    credentials: RwLock<Credentials>,
}

impl Pipeline {
    /// Creates a pipeline with the given configuration.
    pub(crate) fn new(
        base_url: Url,
        credentials: Credentials,
        tls_config: &TlsConfig,
        timeout: Duration,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("veridian-rust/", env!("CARGO_PKG_VERSION")));

        if tls_config.skip_verification {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref ca_cert_file) = tls_config.ca_cert_file {
            let pem = std::fs::read(ca_cert_file).map_err(|e| {
                Error::configuration(format!("failed to read certificate {ca_cert_file:?}: {e}"))
            })?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| {
                Error::configuration(format!("invalid certificate {ca_cert_file:?}: {e}"))
            })?;
            builder = builder.add_root_certificate(cert);
        }

        if let Some(ref ca_cert_pem) = tls_config.ca_cert_pem {
            let cert = reqwest::Certificate::from_pem(ca_cert_pem.as_bytes())
                .map_err(|e| Error::configuration(format!("invalid CA certificate PEM: {e}")))?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            credentials: RwLock::new(credentials),
        })
    }

    /// Replaces the credential material (e.g. after a token refresh).
    pub(crate) fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write() = credentials;
    }

    /// Builds default headers for a request.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        match &*self.credentials.read() {
            Credentials::Bearer(token) => {
                let value = format!("Bearer {token}");
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&value)
                        .map_err(|_| Error::unauthorized("invalid bearer token format"))?,
                );
            }
            Credentials::ApiKey(key) => {
                headers.insert(
                    "x-api-key",
                    HeaderValue::from_str(key)
                        .map_err(|_| Error::unauthorized("invalid API key format"))?,
                );
            }
            Credentials::None => {}
        }

        Ok(headers)
    }

    /// Puts the request on the wire and waits for a response, racing the
    /// caller's cancellation token if one was supplied.
    async fn dispatch(&self, spec: RequestSpec) -> Result<reqwest::Response> {
        let mut url = self
            .base_url
            .join(&spec.render_path())
            .map_err(|e| Error::configuration(format!("invalid URL path: {e}")))?;
        url.set_query(spec.render_query().as_deref());

        #[cfg(feature = "tracing")]
        tracing::debug!(method = %spec.method, url = %url, "dispatching request");

        let mut request = self
            .http
            .request(spec.method.clone(), url)
            .headers(self.build_headers()?);
        if let Some(ref body) = spec.body {
            // .json sets Content-Type: application/json
            request = request.json(body);
        }

        let sent = request.send();
        let outcome = match spec.cancel {
            Some(token) => tokio::select! {
                () = token.cancelled() => {
                    // Dropping the send future aborts the in-flight
                    // connection; nothing is retried afterwards.
                    #[cfg(feature = "tracing")]
                    tracing::debug!("request cancelled by caller");
                    return Err(Error::cancelled());
                }
                outcome = sent => outcome,
            },
            None => sent.await,
        };

        outcome.map_err(map_reqwest_error)
    }

    /// Executes a request whose success response carries a JSON body.
    pub(crate) async fn send<T>(&self, spec: RequestSpec) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch(spec).await?;
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &text));
        }

        let page = PageDescriptor::from_headers(&headers);
        let text = response
            .text()
            .await
            .map_err(|e| Error::protocol(format!("failed to read response body: {e}")))?;
        let body = serde_json::from_str::<T>(&text).map_err(|e| {
            Error::protocol(format!("failed to parse response body: {e}"))
                .with_status(status.as_u16())
                .with_source(e)
        })?;

        Ok(ApiResponse::new(body, status, headers, page))
    }

    /// Executes a request whose success response carries no body
    /// (204, or a 200 on a delete-style operation). Any body the server
    /// does send on success is ignored.
    pub(crate) async fn send_empty(&self, spec: RequestSpec) -> Result<ApiResponse<()>> {
        let response = self.dispatch(spec).await?;
        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(classify_failure(status, &text));
        }

        Ok(ApiResponse::new((), status, headers, None))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Maps a non-2xx response to a typed error.
///
/// 400 is a validation failure: the body is best-effort parsed as a
/// problem-details document and attached when it parses. Every other
/// status becomes a service failure with a status-derived kind.
fn classify_failure(status: StatusCode, body: &str) -> Error {
    if status == StatusCode::BAD_REQUEST {
        let problem = serde_json::from_str::<ValidationProblem>(body).ok();
        let message = problem
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| best_effort_message(body, status));
        let mut err = Error::validation(message).with_status(400);
        if let Some(problem) = problem {
            err = err.with_problem(problem);
        }
        return err;
    }

    let kind = match status.as_u16() {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        429 => ErrorKind::RateLimited,
        500..=599 => ErrorKind::Unavailable,
        _ => ErrorKind::Protocol,
    };
    Error::new(kind, best_effort_message(body, status)).with_status(status.as_u16())
}

/// Extracts a human-readable message from an error body: a best-effort
/// JSON parse, falling back to the raw text.
fn best_effort_message(body: &str, status: StatusCode) -> String {
    if body.is_empty() {
        return format!("HTTP {status}");
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "title", "error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.to_string()
}

/// Maps reqwest failures that happened before any status was received.
fn map_reqwest_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::timeout(format!("request timed out: {e}")).with_source(e)
    } else if e.is_connect() {
        Error::connection(format!("connection failed: {e}")).with_source(e)
    } else if e.is_decode() || e.is_body() {
        Error::protocol(format!("malformed response: {e}")).with_source(e)
    } else {
        Error::connection(format!("transport failure: {e}")).with_source(e)
    }
}
