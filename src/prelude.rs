//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use veridian::prelude::*;
//! ```
//!
//! This provides access to:
//! - Core client types
//! - Error types
//! - The patch type and the response envelope
//! - Endpoint-group request and model types

pub use crate::{
    api::{
        AddCertificateRequest, ApiResource, ApiResourcePatch, BrandingApi, Certificate,
        ClientPatch, ClientsApi, CreateClientRequest, CreateGroupRequest, CreateResourceRequest,
        CreateUserRequest, Group, GroupPatch, GroupsApi, LogEntry, LogLevel, LogsApi, OidcClient,
        ResourceScope, ResourcesApi, Theme, ThemePatch, TrustStore, TrustStoresApi, User,
        UserPatch, UsersApi,
    },
    auth::Credentials,
    client::{Client, ClientBuilder},
    config::TlsConfig,
    error::{Error, ErrorKind, IdentityError, Result, ValidationProblem},
    http::{ApiResponse, PageDescriptor},
    patch::Patch,
};
