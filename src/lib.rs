//! # Veridian Rust SDK
//!
//! Official Rust SDK for the Veridian identity management API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use veridian::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), veridian::Error> {
//!     let client = Client::builder()
//!         .url("https://id.example.com")
//!         .credentials(Credentials::bearer("your-access-token"))
//!         .build()?;
//!
//!     // List users, one page at a time
//!     let response = client.users().list().size(50).await?;
//!     for user in response.body() {
//!         println!("{}", user.user_name);
//!     }
//!
//!     // Partially update a client registration
//!     let patch = ClientPatch {
//!         enabled: Patch::value(false),
//!         description: Patch::null(), // clear the description
//!         ..Default::default()
//!     };
//!     client.clients().update("cli_1", patch).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Patch semantics**: every `*Patch` struct field is a [`Patch`];
//!   `Patch::Absent` leaves the server value untouched, `Patch::value(v)`
//!   replaces it, and `Patch::null()` clears fields declared clearable.
//! - **Response envelope**: every call returns an [`ApiResponse`] carrying
//!   the decoded body, the HTTP status, the response headers, and paging
//!   metadata when the server sent any.
//! - **Error taxonomy**: [`ErrorKind`] separates validation rejections
//!   (with structured [`ValidationProblem`] details), other service
//!   failures, transport failures, and cancellation.
//!
//! ## Features
//!
//! - `rustls` (default): use rustls for TLS
//! - `native-tls`: use native TLS (OpenSSL on Linux, Secure Transport on macOS)
//! - `tracing`: emit request-level diagnostics via the `tracing` crate

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod patch;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use error::{Error, ErrorKind, IdentityError, Result, ValidationProblem};
pub use http::{ApiResponse, PageDescriptor};
pub use patch::Patch;

// Re-export auth and config types
pub use auth::Credentials;
pub use config::TlsConfig;

// Re-exported so callers don't need a direct tokio-util dependency
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let _ = ErrorKind::Unauthorized;
        let _ = Patch::<u32>::absent();
    }
}
