//! TLS configuration for secure connections.

use std::path::PathBuf;

/// Configuration for TLS connections.
///
/// By default the SDK uses system root certificates and validates server
/// certificates. This configuration allows customization for enterprise
/// environments running a private CA.
///
/// ## Example: custom CA
///
/// ```rust
/// use veridian::TlsConfig;
///
/// let config = TlsConfig::default().with_ca_cert_file("/path/to/ca.crt");
/// assert!(config.has_custom_ca());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Custom CA certificate file path.
    pub ca_cert_file: Option<PathBuf>,

    /// Custom CA certificate PEM data.
    pub ca_cert_pem: Option<String>,

    /// Whether to skip certificate verification.
    ///
    /// **WARNING**: insecure; only for local development against
    /// self-signed certificates.
    pub skip_verification: bool,
}

impl TlsConfig {
    /// Creates an insecure TLS config that skips verification.
    ///
    /// **WARNING**: this makes connections vulnerable to
    /// man-in-the-middle attacks. Only use for local development.
    pub fn insecure() -> Self {
        Self {
            skip_verification: true,
            ..Self::default()
        }
    }

    /// Sets a custom CA certificate file.
    #[must_use]
    pub fn with_ca_cert_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert_file = Some(path.into());
        self
    }

    /// Sets custom CA certificate PEM data.
    #[must_use]
    pub fn with_ca_cert_pem(mut self, pem: impl Into<String>) -> Self {
        self.ca_cert_pem = Some(pem.into());
        self
    }

    /// Returns `true` if a custom CA is configured.
    pub fn has_custom_ca(&self) -> bool {
        self.ca_cert_file.is_some() || self.ca_cert_pem.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TlsConfig::default();
        assert!(!config.skip_verification);
        assert!(!config.has_custom_ca());
    }

    #[test]
    fn test_insecure() {
        assert!(TlsConfig::insecure().skip_verification);
    }

    #[test]
    fn test_custom_ca() {
        let config = TlsConfig::default().with_ca_cert_file("/path/to/ca.crt");
        assert!(config.has_custom_ca());
        assert_eq!(config.ca_cert_file, Some(PathBuf::from("/path/to/ca.crt")));

        let config = TlsConfig::default().with_ca_cert_pem("-----BEGIN CERTIFICATE-----");
        assert!(config.has_custom_ca());
    }
}
