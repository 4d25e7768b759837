//! Problem-details body returned for validation failures.

use serde::{Deserialize, Serialize};

/// A single machine- and human-readable validation failure.
///
/// ## Example
///
/// ```rust
/// let err: veridian::IdentityError =
///     serde_json::from_str(r#"{"code":"required","description":"Name is required"}"#)?;
/// assert_eq!(err.code, "required");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    /// Machine-readable error code (e.g. `"required"`, `"duplicate"`).
    pub code: String,
    /// Human-readable description of the failure.
    pub description: String,
}

/// A problem-details document (RFC 9457 shape) extended with a list of
/// [`IdentityError`]s, returned by the API for 400-class validation
/// failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblem {
    /// A URI reference identifying the problem type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// A short, human-readable summary of the problem type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The HTTP status code, repeated in the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// A human-readable explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference identifying this specific occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// The field-level validation failures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IdentityError>,
}

impl ValidationProblem {
    /// Returns the errors matching the given code.
    pub fn errors_with_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a IdentityError> + 'a {
        self.errors.iter().filter(move |e| e.code == code)
    }
}

impl std::fmt::Display for ValidationProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.title, &self.detail) {
            (Some(title), Some(detail)) => write!(f, "{title}: {detail}")?,
            (Some(title), None) => write!(f, "{title}")?,
            (None, Some(detail)) => write!(f, "{detail}")?,
            (None, None) => write!(f, "validation failed")?,
        }
        if !self.errors.is_empty() {
            write!(f, " ({} error(s))", self.errors.len())?;
        }
        Ok(())
    }
}
