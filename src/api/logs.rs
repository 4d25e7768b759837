//! Read-only access to the tenant audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::http::{ApiResponse, RequestSpec};

use super::{DEFAULT_PAGE, DEFAULT_SIZE};

/// Endpoint group for the tenant audit log.
///
/// Log entries are read-only; the API exposes no create, update, or
/// delete operations on them. Access via
/// [`Client::logs`](crate::Client::logs).
#[derive(Clone)]
pub struct LogsApi {
    client: Client,
}

impl LogsApi {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists audit log entries, paged and newest first.
    ///
    /// ```rust,no_run
    /// # async fn run(client: veridian::Client) -> Result<(), veridian::Error> {
    /// use veridian::api::LogLevel;
    ///
    /// let response = client
    ///     .logs()
    ///     .list()
    ///     .level(LogLevel::Warning)
    ///     .search("sign-in")
    ///     .await?;
    /// for entry in response.body() {
    ///     println!("{} {}", entry.timestamp, entry.message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListLogsRequest {
        ListLogsRequest {
            client: self.client.clone(),
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            from: None,
            to: None,
            level: None,
            search: None,
        }
    }
}

impl std::fmt::Debug for LogsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogsApi").finish_non_exhaustive()
    }
}

/// Severity of an audit log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogLevel {
    /// Routine activity.
    Information,
    /// Something worth attention but not a failure.
    Warning,
    /// A failed operation.
    Error,
}

impl LogLevel {
    fn as_query_value(self) -> &'static str {
        match self {
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

/// A single audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// The entry id.
    pub id: String,
    /// When the logged event happened.
    pub timestamp: DateTime<Utc>,
    /// Severity.
    pub level: LogLevel,
    /// Human-readable description of the event.
    pub message: String,
    /// Event category (e.g. `"authentication"`, `"user-management"`).
    #[serde(default)]
    pub category: Option<String>,
    /// Id of the subject the event concerns, when there is one.
    #[serde(default)]
    pub subject_id: Option<String>,
    /// Source IP of the request that caused the event.
    #[serde(default)]
    pub ip_address: Option<String>,
}

/// Builder for a paged audit log query. Awaiting it sends the request.
#[derive(Debug)]
pub struct ListLogsRequest {
    client: Client,
    page: u32,
    size: u32,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
    level: Option<LogLevel>,
    search: Option<String>,
}

impl ListLogsRequest {
    /// Selects the page to fetch (1-based).
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Only returns entries at or after this instant.
    #[must_use]
    pub fn since(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Only returns entries at or before this instant.
    #[must_use]
    pub fn until(mut self, to: DateTime<Utc>) -> Self {
        self.to = Some(to);
        self
    }

    /// Only returns entries at the given severity.
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Full-text filter over entry messages.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    async fn execute(self) -> Result<ApiResponse<Vec<LogEntry>>> {
        let spec = RequestSpec::get(&["api", "logs"])
            .query("page", self.page)
            .query("size", self.size)
            .query_opt("from", self.from.map(|t| t.to_rfc3339()))
            .query_opt("to", self.to.map(|t| t.to_rfc3339()))
            .query_opt("level", self.level.map(LogLevel::as_query_value))
            .query_opt("search", self.search)
            .cancel_on(self.client.cancellation());
        self.client.pipeline().send(spec).await
    }
}

impl std::future::IntoFuture for ListLogsRequest {
    type Output = Result<ApiResponse<Vec<LogEntry>>>;
    type IntoFuture = std::pin::Pin<Box<dyn std::future::Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_round_trips() {
        let level: LogLevel = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(level, LogLevel::Warning);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"warning\"");
    }

    #[test]
    fn test_log_entry_deserializes_with_optional_fields_missing() {
        let entry: LogEntry = serde_json::from_value(serde_json::json!({
            "id": "log_1",
            "timestamp": "2026-03-04T12:00:00Z",
            "level": "error",
            "message": "sign-in failed",
        }))
        .unwrap();
        assert_eq!(entry.level, LogLevel::Error);
        assert!(entry.category.is_none());
        assert!(entry.ip_address.is_none());
    }
}

#[cfg(test)]
mod wiremock_tests {
    use chrono::TimeZone;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::auth::Credentials;

    async fn client_for(server: &MockServer) -> Client {
        Client::builder()
            .url(server.uri())
            .credentials(Credentials::bearer("token"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_sends_all_filters_as_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/logs"))
            .and(query_param("page", "2"))
            .and(query_param("size", "25"))
            .and(query_param("level", "error"))
            .and(query_param("search", "lockout"))
            .and(query_param("from", "2026-03-01T00:00:00+00:00"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let from = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let response = client
            .logs()
            .list()
            .page(2)
            .size(25)
            .level(LogLevel::Error)
            .search("lockout")
            .since(from)
            .await
            .unwrap();
        assert!(response.body().is_empty());
    }
}
