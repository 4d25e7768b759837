//! Error types for the Veridian SDK.
//!
//! Every failed call surfaces as an [`Error`] carrying an [`ErrorKind`].
//! The kinds fall into four classes, and every possible outcome of a
//! request maps to exactly one of them:
//!
//! - **Caller errors** (`Configuration`): bad input detected before
//!   anything reaches the wire.
//! - **Validation failures** (`Validation`): HTTP 400; when the body is a
//!   problem-details document the structured [`ValidationProblem`] is
//!   attached and reachable via [`Error::validation_problem`].
//! - **Service failures** (`Unauthorized`, `Forbidden`, `NotFound`,
//!   `Conflict`, `RateLimited`, `Unavailable`, `Internal`, `Protocol`):
//!   the server answered with a non-2xx status other than 400.
//! - **Transport failures** (`Connection`, `Timeout`, `Cancelled`): the
//!   request never produced a status, so callers can distinguish "never
//!   reached the server" from "server rejected the request".
//!
//! No error is retried, logged-and-swallowed, or treated as fatal to the
//! process; each call fails independently to its direct caller.

mod error;
mod kind;
mod problem;

pub use error::Error;
pub use kind::ErrorKind;
pub use problem::{IdentityError, ValidationProblem};

/// A specialized `Result` type for Veridian operations.
pub type Result<T> = std::result::Result<T, Error>;
