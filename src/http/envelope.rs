//! Typed result envelopes and pagination metadata.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::PAGINATION_HEADER;

/// Pagination metadata for list endpoints, parsed from the
/// `x-pagination` response header (a JSON-encoded object, not part of
/// the body).
///
/// ## Example
///
/// ```rust
/// let descriptor: veridian::PageDescriptor = serde_json::from_str(
///     r#"{"pageSize":10,"currentPage":1,"totalCount":42,"hasPrevious":false,"hasNext":true}"#,
/// )?;
/// assert_eq!(descriptor.total_count, 42);
/// assert!(descriptor.has_next);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Number of items per page.
    pub page_size: u32,
    /// The page this response covers (1-based).
    pub current_page: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl PageDescriptor {
    /// Parses the pagination header out of a response header map.
    ///
    /// A missing or malformed header means "no pagination metadata
    /// available", never a request failure.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = headers.get(PAGINATION_HEADER)?.to_str().ok()?;
        serde_json::from_str(raw).ok()
    }
}

/// The immutable result of a successful API call.
///
/// Wraps the deserialized body (unit for no-content responses) together
/// with the transport metadata of the response. List endpoints
/// additionally carry a [`PageDescriptor`] when the server sent one.
#[derive(Debug)]
pub struct ApiResponse<T> {
    body: T,
    status: StatusCode,
    headers: HeaderMap,
    page: Option<PageDescriptor>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(
        body: T,
        status: StatusCode,
        headers: HeaderMap,
        page: Option<PageDescriptor>,
    ) -> Self {
        Self {
            body,
            status,
            headers,
            page,
        }
    }

    /// Returns the deserialized response body.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the envelope, returning the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Returns the raw HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the pagination metadata, when the server sent a parseable
    /// `x-pagination` header.
    pub fn page(&self) -> Option<&PageDescriptor> {
        self.page.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_page_descriptor_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            PAGINATION_HEADER,
            HeaderValue::from_static(
                r#"{"pageSize":10,"currentPage":1,"totalCount":42,"hasPrevious":false,"hasNext":true}"#,
            ),
        );
        let page = PageDescriptor::from_headers(&headers).unwrap();
        assert_eq!(page.page_size, 10);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_count, 42);
        assert!(!page.has_previous);
        assert!(page.has_next);
    }

    #[test]
    fn test_missing_header_is_none() {
        assert!(PageDescriptor::from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_malformed_header_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(PAGINATION_HEADER, HeaderValue::from_static("not json"));
        assert!(PageDescriptor::from_headers(&headers).is_none());

        headers.insert(
            PAGINATION_HEADER,
            HeaderValue::from_static(r#"{"pageSize":"ten"}"#),
        );
        assert!(PageDescriptor::from_headers(&headers).is_none());
    }

    #[test]
    fn test_envelope_accessors() {
        let envelope = ApiResponse::new(
            vec![1, 2, 3],
            StatusCode::OK,
            HeaderMap::new(),
            None,
        );
        assert_eq!(envelope.body(), &vec![1, 2, 3]);
        assert_eq!(envelope.status(), StatusCode::OK);
        assert!(envelope.page().is_none());
        assert_eq!(envelope.into_body(), vec![1, 2, 3]);
    }
}
