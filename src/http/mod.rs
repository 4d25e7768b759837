//! The generic request/response pipeline.
//!
//! Every endpoint method in [`crate::api`] builds a `RequestSpec`
//! (verb, percent-encoded path, order-stable query, optional JSON body)
//! and hands it to the shared `Pipeline`, which dispatches it over
//! reqwest and classifies the outcome into an [`ApiResponse`] envelope or
//! a typed [`Error`](crate::Error). There is no per-endpoint transport
//! code.

mod envelope;
mod pipeline;
mod request;

pub use envelope::{ApiResponse, PageDescriptor};
pub(crate) use pipeline::Pipeline;
pub(crate) use request::RequestSpec;

/// Response header carrying the JSON-encoded [`PageDescriptor`].
pub(crate) const PAGINATION_HEADER: &str = "x-pagination";
