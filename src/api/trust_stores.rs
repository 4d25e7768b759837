//! Trust store and certificate management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};

/// Endpoint group for managing trust stores and their certificates.
///
/// Access via [`Client::trust_stores`](crate::Client::trust_stores).
#[derive(Clone)]
pub struct TrustStoresApi {
    client: Client,
}

impl TrustStoresApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists trust stores.
    pub async fn list(&self) -> Result<ApiResponse<Vec<TrustStore>>> {
        let spec =
            RequestSpec::get(&["api", "trust-stores"]).cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Gets a trust store by id.
    pub async fn get(&self, store_id: impl AsRef<str>) -> Result<ApiResponse<TrustStore>> {
        let spec = RequestSpec::get(&["api", "trust-stores", store_id.as_ref()])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Lists the certificates in a trust store.
    pub async fn certificates(
        &self,
        store_id: impl AsRef<str>,
    ) -> Result<ApiResponse<Vec<Certificate>>> {
        let spec = RequestSpec::get(&["api", "trust-stores", store_id.as_ref(), "certificates"])
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Adds a certificate to a trust store.
    pub async fn add_certificate(
        &self,
        store_id: impl AsRef<str>,
        request: AddCertificateRequest,
    ) -> Result<ApiResponse<Certificate>> {
        let spec = RequestSpec::post(&["api", "trust-stores", store_id.as_ref(), "certificates"])
            .json(&request)?
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }

    /// Removes a certificate from a trust store.
    pub async fn delete_certificate(
        &self,
        store_id: impl AsRef<str>,
        certificate_id: impl AsRef<str>,
    ) -> Result<ApiResponse<()>> {
        let spec = RequestSpec::delete(&[
            "api",
            "trust-stores",
            store_id.as_ref(),
            "certificates",
            certificate_id.as_ref(),
        ])
        .cancel_on(self.client.cancellation());
        self.client.pipeline().send_empty(spec).await
    }
}

impl std::fmt::Debug for TrustStoresApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustStoresApi").finish_non_exhaustive()
    }
}

/// A trust store as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustStore {
    /// The trust store id (e.g. `"tst_abc123"`).
    pub id: String,
    /// The trust store name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Number of certificates in the store.
    #[serde(default)]
    pub certificate_count: u64,
    /// When the store was created.
    pub created_at: DateTime<Utc>,
}

/// A certificate held in a trust store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// The certificate id.
    pub id: String,
    /// The certificate subject.
    pub subject: String,
    /// SHA-256 thumbprint.
    pub thumbprint: String,
    /// Start of the validity window.
    pub not_before: DateTime<Utc>,
    /// End of the validity window.
    pub not_after: DateTime<Utc>,
    /// Whether the certificate has been revoked.
    #[serde(default)]
    pub revoked: bool,
}

/// Request to add a certificate to a trust store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCertificateRequest {
    /// PEM-encoded certificate.
    pub pem: String,
}

impl AddCertificateRequest {
    /// Creates a request from PEM data.
    pub fn new(pem: impl Into<String>) -> Self {
        Self { pem: pem.into() }
    }
}
