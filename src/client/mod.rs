//! Papierkram REST client: one authenticated HTTP primitive ([`PapierkramClient::perform`])
//! plus a typed method per remote operation (see `resources.rs`).
//!
//! Payloads are opaque `serde_json::Value`s in both directions. Nothing here
//! knows what an invoice or a company looks like.

mod resources;

use std::fmt;
use std::num::NonZeroU32;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::config::EndpointConfig;
use crate::error::ClientError;

// ── Pagination ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PaginationParams {
    /// Page number (starting at 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<NonZeroU32>,
    /// Number of entries per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<NonZeroU32>,
}

impl PaginationParams {
    pub fn to_query(self) -> Query {
        Query::new()
            .with("page", self.page)
            .with("page_size", self.page_size)
    }
}

// ── Query string ─────────────────────────────────────────────────

/// Ordered query parameters. Absent values are dropped when added, so they
/// never reach the URL as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<T: fmt::Display>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.pairs.push((key, v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

// ── Outcome ──────────────────────────────────────────────────────

/// Normalized successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// JSON body, passed through untouched.
    Json(Value),
    /// 204 No Content.
    NoContent,
    /// 2xx with a non-JSON body (PDF exports etc.). Only the content type is kept.
    Opaque { content_type: String },
}

impl Payload {
    /// The value handed back to callers. The two marker variants render as
    /// `{"success": true}` objects.
    pub fn into_value(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::NoContent => serde_json::json!({ "success": true }),
            Payload::Opaque { content_type } => {
                serde_json::json!({ "success": true, "contentType": content_type })
            }
        }
    }

    /// Pretty-printed JSON text, as returned to the command caller.
    pub fn render(self) -> String {
        let value = self.into_value();
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}

// ── Client ───────────────────────────────────────────────────────

/// Stateless apart from the immutable endpoint config, so one instance is
/// shared (behind an `Arc`) by every concurrent invocation.
pub struct PapierkramClient {
    http: reqwest::Client,
    endpoint: EndpointConfig,
}

impl PapierkramClient {
    pub fn new(endpoint: EndpointConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("papierkram-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    /// Absolute URL for `path` (which must start with `/`), with query
    /// parameters appended in insertion order.
    pub fn request_url(&self, path: &str, query: Option<&Query>) -> Result<Url, ClientError> {
        let raw = format!("{}{path}", self.endpoint.base_url());
        let mut url = Url::parse(&raw).map_err(|e| ClientError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform one HTTP call and normalize the outcome.
    ///
    /// Single attempt: no retries, no redirect handling beyond reqwest's
    /// defaults. A JSON `Content-Type` is only sent when `body` is present.
    pub async fn perform(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
    ) -> Result<Payload, ClientError> {
        let url = self.request_url(path, query)?;
        debug!(%method, %url, has_body = body.is_some(), "papierkram request");

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(self.endpoint.api_token())
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, path, "papierkram request failed");
            ClientError::Transport(e)
        })?;
        normalize(response).await
    }
}

async fn normalize(response: Response) -> Result<Payload, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "failed to read papierkram error body");
                format!("<unreadable response body: {e}>")
            }
        };
        warn!(status = status.as_u16(), "papierkram API error");
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }

    if status == StatusCode::NO_CONTENT {
        return Ok(Payload::NoContent);
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.contains("application/json") {
        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            message: e.to_string(),
        })?;
        return Ok(Payload::Json(value));
    }

    Ok(Payload::Opaque { content_type })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{FakeApi, Reply};

    fn client_for(api: &FakeApi) -> PapierkramClient {
        let endpoint = EndpointConfig::new(&api.base_url(), "test-token").unwrap();
        PapierkramClient::new(endpoint).unwrap()
    }

    #[test]
    fn test_query_drops_absent_values() {
        let query = Query::new()
            .with("page", Some(2))
            .with::<u32>("page_size", None)
            .with("year", Some(2024));
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("page", "2"), ("year", "2024")]);
    }

    #[test]
    fn test_request_url_without_query_has_no_question_mark() {
        let endpoint = EndpointConfig::new("https://acme.papierkram.de/api/v1/", "t").unwrap();
        let client = PapierkramClient::new(endpoint).unwrap();
        let url = client
            .request_url("/income/invoices", Some(&PaginationParams::default().to_query()))
            .unwrap();
        assert_eq!(url.as_str(), "https://acme.papierkram.de/api/v1/income/invoices");
    }

    #[test]
    fn test_payload_markers() {
        assert_eq!(Payload::NoContent.into_value(), serde_json::json!({ "success": true }));
        assert_eq!(
            Payload::Opaque { content_type: "application/pdf".into() }.into_value(),
            serde_json::json!({ "success": true, "contentType": "application/pdf" })
        );
    }

    #[test]
    fn test_render_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":{"b":1,"a":2}}"#).unwrap();
        let rendered = Payload::Json(value).render();
        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        assert!(zeta < alpha);
        assert!(rendered.find("\"b\"").unwrap() < rendered.find("\"a\"").unwrap());
    }

    #[tokio::test]
    async fn test_perform_sends_auth_and_accept_headers() {
        let api = FakeApi::start(|_| Reply::json(200, r#"{"ok":true}"#)).await;
        let client = client_for(&api);

        let payload = client.perform(Method::GET, "/info", None, None).await.unwrap();
        assert_eq!(payload, Payload::Json(serde_json::json!({ "ok": true })));

        let seen = api.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, "GET");
        assert_eq!(seen[0].path, "/info");
        assert_eq!(seen[0].header("authorization").as_deref(), Some("Bearer test-token"));
        assert_eq!(seen[0].header("accept").as_deref(), Some("application/json"));
        assert_eq!(seen[0].header("content-type"), None);
        assert!(seen[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_perform_marks_json_body() {
        let api = FakeApi::start(|_| Reply::json(201, r#"{"id":1}"#)).await;
        let client = client_for(&api);
        let body = serde_json::json!({ "name": "Acme GmbH" });

        client
            .perform(Method::POST, "/contact/companies", Some(&body), None)
            .await
            .unwrap();

        let seen = api.requests();
        assert_eq!(seen[0].header("content-type").as_deref(), Some("application/json"));
        assert_eq!(seen[0].body_json(), body);
    }

    #[tokio::test]
    async fn test_non_success_carries_status_and_raw_body() {
        let api = FakeApi::start(|_| Reply::text(404, "text/plain", "Not Found: company 99")).await;
        let client = client_for(&api);

        let err = client
            .perform(Method::GET, "/contact/companies/99", None, None)
            .await
            .unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found: company 99");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status_and_reports_read_failure() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut seen = Vec::new();
            let mut buf = [0u8; 1024];
            while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                seen.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\nContent-Length: 100\r\n\r\nshort")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let endpoint = EndpointConfig::new(&format!("http://{addr}/api/v1"), "t").unwrap();
        let client = PapierkramClient::new(endpoint).unwrap();
        let err = client.perform(Method::GET, "/info", None, None).await.unwrap_err();
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 500);
                assert!(body.starts_with("<unreadable response body:"), "{body}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_content_is_success_marker() {
        let api = FakeApi::start(|_| Reply::no_content()).await;
        let client = client_for(&api);
        let payload = client
            .perform(Method::POST, "/income/invoices/7/archive", None, None)
            .await
            .unwrap();
        assert_eq!(payload, Payload::NoContent);
    }

    #[tokio::test]
    async fn test_binary_body_is_not_decoded() {
        let api = FakeApi::start(|_| Reply::text(200, "application/pdf", "%PDF-1.4 ...")).await;
        let client = client_for(&api);
        let payload = client
            .perform(Method::GET, "/income/invoices/7", None, None)
            .await
            .unwrap();
        assert_eq!(
            payload,
            Payload::Opaque { content_type: "application/pdf".into() }
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let api = FakeApi::start(|_| Reply::json(200, "{not json")).await;
        let client = client_for(&api);
        let err = client.perform(Method::GET, "/info", None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let endpoint = EndpointConfig::new("http://127.0.0.1:1/api/v1", "t").unwrap();
        let client = PapierkramClient::new(endpoint).unwrap();
        let err = client.perform(Method::GET, "/info", None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
