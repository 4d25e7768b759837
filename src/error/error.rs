//! Main error type for the Veridian SDK.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::{ErrorKind, ValidationProblem};

/// The primary error type for Veridian SDK operations.
///
/// `Error` provides context for debugging and error handling:
/// - [`kind()`](Error::kind): categorization for `match` statements
/// - [`status()`](Error::status): the HTTP status, when one was received
/// - [`validation_problem()`](Error::validation_problem): structured
///   field errors for 400 responses
///
/// ## Example
///
/// ```rust
/// use veridian::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::Validation => {
///             if let Some(problem) = err.validation_problem() {
///                 for e in &problem.errors {
///                     eprintln!("{}: {}", e.code, e.description);
///                 }
///             }
///         }
///         ErrorKind::Unauthorized => eprintln!("invalid credentials"),
///         kind if kind.is_transport() => eprintln!("never reached the server: {err}"),
///         _ => eprintln!("request failed: {err}"),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    /// HTTP status of the response, when one was received.
    status: Option<u16>,
    /// Structured validation failures attached to 400 responses.
    problem: Option<Box<ValidationProblem>>,
    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            problem: None,
            source: None,
        }
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code, if the server produced one.
    ///
    /// `None` for caller and transport errors: no status ever existed.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the structured validation problem for 400 responses whose
    /// body was a parseable problem-details document.
    pub fn validation_problem(&self) -> Option<&ValidationProblem> {
        self.problem.as_deref()
    }

    /// Returns `true` if the request never reached the server.
    #[inline]
    pub fn is_transport(&self) -> bool {
        self.kind.is_transport()
    }

    /// Returns `true` if this is a 400-class validation failure.
    #[inline]
    pub fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }

    /// Sets the HTTP status for this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches a validation problem to this error.
    #[must_use]
    pub fn with_problem(mut self, problem: ValidationProblem) -> Self {
        self.problem = Some(Box::new(problem));
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for common error types

    /// Creates a validation error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a protocol error.
    pub fn protocol(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Protocol, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Connection, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Creates a cancelled error.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "request cancelled by caller")
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status: {status})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, kind.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::configuration(format!("invalid URL: {err}")).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::protocol(format!("JSON error: {err}")).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentityError;

    #[test]
    fn test_error_new() {
        let err = Error::new(ErrorKind::NotFound, "client not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("client not found"));
        assert!(err.status().is_none());
        assert!(err.validation_problem().is_none());
    }

    #[test]
    fn test_error_with_status() {
        let err = Error::unauthorized("token expired").with_status(401);
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_error_with_problem() {
        let problem = ValidationProblem {
            errors: vec![IdentityError {
                code: "required".into(),
                description: "Name is required".into(),
            }],
            ..Default::default()
        };
        let err = Error::validation("validation failed")
            .with_status(400)
            .with_problem(problem);
        assert!(err.is_validation());
        let attached = err.validation_problem().unwrap();
        assert_eq!(attached.errors[0].code, "required");
    }

    #[test]
    fn test_error_classes() {
        assert!(Error::cancelled().is_transport());
        assert!(Error::connection("refused").is_transport());
        assert!(!Error::validation("bad input").is_transport());
        assert!(Error::not_found("gone").kind().is_service());
    }

    #[test]
    fn test_error_with_source() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = Error::protocol("bad body").with_source(json_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_serde_json() {
        let err: Error = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn test_from_url_parse() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
