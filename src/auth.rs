//! Credential material for outgoing requests.
//!
//! Authentication is deliberately thin: the SDK attaches whatever
//! credential the caller supplies to every request and never refreshes
//! or negotiates anything on its own. Use
//! [`Client::set_credentials`](crate::Client::set_credentials) when a
//! token is rotated.

/// Credential material attached to outgoing requests.
///
/// Read-only after construction; each request reads the current value
/// without any cross-call coordination.
#[derive(Clone)]
pub enum Credentials {
    /// No authentication header is sent.
    None,
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// `x-api-key: <key>`.
    ApiKey(String),
}

impl Credentials {
    /// Creates bearer-token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(token.into())
    }

    /// Creates API-key credentials.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }
}

// Debug must not leak secrets.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::None => write!(f, "Credentials::None"),
            Credentials::Bearer(_) => write!(f, "Credentials::Bearer(***)"),
            Credentials::ApiKey(_) => write!(f, "Credentials::ApiKey(***)"),
        }
    }
}

impl From<&str> for Credentials {
    fn from(token: &str) -> Self {
        Credentials::bearer(token)
    }
}

impl From<String> for Credentials {
    fn from(token: String) -> Self {
        Credentials::Bearer(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_does_not_leak() {
        let debug = format!("{:?}", Credentials::bearer("secret-token"));
        assert!(!debug.contains("secret-token"));
        let debug = format!("{:?}", Credentials::api_key("secret-key"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_from_str_is_bearer() {
        assert!(matches!(Credentials::from("tok"), Credentials::Bearer(_)));
    }
}
