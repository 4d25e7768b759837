//! Client configuration.
//!
//! Configuration is read-only after the client is built. There is no
//! retry, backoff, or caching configuration: the SDK issues exactly one
//! wire request per call and leaves retry policy to the caller or an
//! outer layer.

mod tls;

pub use tls::TlsConfig;

use std::time::Duration;

/// Default per-request timeout.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
