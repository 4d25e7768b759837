//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types,
/// enabling different handling strategies for different failure modes.
///
/// ## Classes
///
/// | ErrorKind       | Class      | Typical cause                         |
/// |-----------------|------------|---------------------------------------|
/// | `Validation`    | validation | 400 with field-level identity errors  |
/// | `Unauthorized`  | service    | 401, missing or expired credentials   |
/// | `Forbidden`     | service    | 403, insufficient permissions         |
/// | `NotFound`      | service    | 404, resource does not exist          |
/// | `Conflict`      | service    | 409, duplicate or concurrent change   |
/// | `RateLimited`   | service    | 429                                   |
/// | `Unavailable`   | service    | 5xx                                   |
/// | `Internal`      | service    | server-reported internal error        |
/// | `Protocol`      | service    | unparseable or unexpected response    |
/// | `Connection`    | transport  | DNS, TLS, connection refused          |
/// | `Timeout`       | transport  | client-side timeout                   |
/// | `Cancelled`     | transport  | caller cancelled the in-flight call   |
/// | `Configuration` | caller     | bad base URL, unencodable body        |
///
/// The SDK never retries on its own; whether a kind is worth retrying is
/// the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The server rejected the request body or parameters.
    ///
    /// HTTP: 400 Bad Request. The structured problem-details body, when
    /// present, is attached to the error.
    ///
    /// Recoverable by correcting the input; never retried automatically.
    #[error("validation failed")]
    Validation,

    /// Authentication failed (invalid or expired credentials).
    ///
    /// HTTP: 401 Unauthorized.
    #[error("unauthorized")]
    Unauthorized,

    /// Valid credentials but insufficient permissions.
    ///
    /// HTTP: 403 Forbidden.
    #[error("forbidden")]
    Forbidden,

    /// Requested resource was not found.
    ///
    /// HTTP: 404 Not Found.
    #[error("not found")]
    NotFound,

    /// The request conflicts with existing state.
    ///
    /// HTTP: 409 Conflict.
    #[error("conflict")]
    Conflict,

    /// Rate limit exceeded.
    ///
    /// HTTP: 429 Too Many Requests.
    #[error("rate limited")]
    RateLimited,

    /// Service temporarily unavailable.
    ///
    /// HTTP: 5xx.
    #[error("service unavailable")]
    Unavailable,

    /// Internal server error reported by the service.
    #[error("internal error")]
    Internal,

    /// Protocol error (malformed response body, unexpected status).
    ///
    /// May indicate a version mismatch between SDK and server.
    #[error("protocol error")]
    Protocol,

    /// Connection error (DNS, TLS handshake, network unreachable).
    ///
    /// The request never reached the server.
    #[error("connection error")]
    Connection,

    /// The request timed out before a response arrived.
    #[error("timeout")]
    Timeout,

    /// The caller cancelled the in-flight request.
    ///
    /// Distinct from a server error: nothing is known about what, if
    /// anything, the server did with the request.
    #[error("cancelled")]
    Cancelled,

    /// Client-side configuration error; nothing was sent.
    #[error("configuration error")]
    Configuration,
}

impl ErrorKind {
    /// Returns `true` for failures raised before a response status
    /// existed: connection failures, timeouts, and cancellation.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Cancelled
        )
    }

    /// Returns `true` for non-2xx statuses other than 400.
    pub fn is_service(&self) -> bool {
        matches!(
            self,
            ErrorKind::Unauthorized
                | ErrorKind::Forbidden
                | ErrorKind::NotFound
                | ErrorKind::Conflict
                | ErrorKind::RateLimited
                | ErrorKind::Unavailable
                | ErrorKind::Internal
                | ErrorKind::Protocol
        )
    }

    /// Returns `true` for 400-class validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, ErrorKind::Validation)
    }
}
