//! Wire request descriptors.

use reqwest::Method;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};

/// Everything the pipeline needs to put one request on the wire.
///
/// Built by the endpoint layer, consumed once by
/// [`Pipeline`](super::Pipeline). Path segments are percent-encoded
/// individually at render time (never the whole path), and query pairs
/// are emitted in insertion order so the same descriptor always renders
/// the same URL.
pub(crate) struct RequestSpec {
    pub(crate) method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) cancel: Option<CancellationToken>,
}

impl RequestSpec {
    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
            cancel: None,
        }
    }

    pub(crate) fn get(segments: &[&str]) -> Self {
        Self::new(Method::GET, segments)
    }

    pub(crate) fn post(segments: &[&str]) -> Self {
        Self::new(Method::POST, segments)
    }

    pub(crate) fn put(segments: &[&str]) -> Self {
        Self::new(Method::PUT, segments)
    }

    pub(crate) fn patch(segments: &[&str]) -> Self {
        Self::new(Method::PATCH, segments)
    }

    pub(crate) fn delete(segments: &[&str]) -> Self {
        Self::new(Method::DELETE, segments)
    }

    /// Appends a query parameter.
    #[must_use]
    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Appends a query parameter only when the caller supplied a value.
    #[must_use]
    pub(crate) fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attaches a JSON body. Patch objects and create requests both go
    /// through plain serde here; the omission rule for patches lives in
    /// their field attributes, not in the pipeline.
    pub(crate) fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(
            serde_json::to_value(body)
                .map_err(|e| Error::configuration(format!("unencodable request body: {e}")))?,
        );
        Ok(self)
    }

    /// Races the dispatched request against the given token.
    #[must_use]
    pub(crate) fn cancel_on(mut self, token: Option<CancellationToken>) -> Self {
        self.cancel = token;
        self
    }

    /// Renders the path, percent-encoding each segment individually.
    pub(crate) fn render_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(&urlencoding::encode(segment));
        }
        path
    }

    /// Renders the query string in insertion order, or `None` when no
    /// parameters were supplied.
    pub(crate) fn render_query(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let rendered: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        Some(rendered.join("&"))
    }
}

impl std::fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSpec")
            .field("method", &self.method)
            .field("path", &self.render_path())
            .field("query", &self.render_query())
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_are_encoded_individually() {
        let spec = RequestSpec::get(&["api", "users", "usr 1/special:id"]);
        assert_eq!(spec.render_path(), "/api/users/usr%201%2Fspecial%3Aid");
    }

    #[test]
    fn test_query_is_order_stable() {
        let spec = RequestSpec::get(&["api", "clients"])
            .query("page", 1)
            .query("size", 10)
            .query("search", "web app");
        assert_eq!(
            spec.render_query().as_deref(),
            Some("page=1&size=10&search=web%20app")
        );
    }

    #[test]
    fn test_unset_parameters_are_omitted() {
        let spec = RequestSpec::get(&["api", "clients"])
            .query_opt("search", None::<String>)
            .query("page", 2);
        assert_eq!(spec.render_query().as_deref(), Some("page=2"));

        let bare = RequestSpec::get(&["api", "clients"]);
        assert!(bare.render_query().is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let make = || {
            RequestSpec::get(&["api", "logs"])
                .query("level", "warn")
                .query("page", 1)
        };
        assert_eq!(make().render_query(), make().render_query());
        assert_eq!(make().render_path(), make().render_path());
    }

    #[test]
    fn test_json_body() {
        let spec = RequestSpec::post(&["api", "groups"])
            .json(&serde_json::json!({"name": "admins"}))
            .unwrap();
        assert_eq!(spec.body, Some(serde_json::json!({"name": "admins"})));
    }
}
