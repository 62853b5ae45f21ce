//! # Cotacao Client SDK
//!
//! A typed Rust client for the quote API.

use std::time::Duration;

use cotacao_types::BidResponse;
use reqwest::Client;

/// Address the quote server listens on by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Deadline for one client call, covering request and body decode.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid request: {0}")]
    Request(reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Quote API client.
pub struct CotacaoClient {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl Default for CotacaoClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CotacaoClient {
    /// Creates a new client with the default deadline.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    /// Overrides the per-call deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the current bid from `GET /cotacao`.
    pub async fn get_bid(&self) -> Result<BidResponse, ClientError> {
        let request = self
            .http
            .get(format!("{}/cotacao", self.base_url))
            .build()
            .map_err(ClientError::Request)?;

        tokio::time::timeout(self.timeout, async {
            let resp = self.http.execute(request).await?;
            self.handle_response(resp).await
        })
        .await
        .map_err(|_| ClientError::Timeout(self.timeout))?
    }

    /// Decodes the body as a bid whatever the status; error pages fail here.
    async fn handle_response(&self, resp: reqwest::Response) -> Result<BidResponse, ClientError> {
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[test]
    fn test_client_creation() {
        let client = CotacaoClient::default();
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.timeout, Duration::from_millis(300));
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = CotacaoClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_get_bid() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(r#"{"bid":"5.43"}"#),
        )
        .await;

        let bid = CotacaoClient::new(server.uri()).get_bid().await.unwrap();

        assert_eq!(bid.bid, "5.43");
    }

    #[tokio::test]
    async fn test_get_bid_timeout() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid":"5.43"}"#)
                .set_delay(Duration::from_millis(600)),
        )
        .await;

        let err = CotacaoClient::new(server.uri()).get_bid().await.unwrap_err();

        assert!(matches!(err, ClientError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_get_bid_invalid_json() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string("not json")).await;

        let err = CotacaoClient::new(server.uri()).get_bid().await.unwrap_err();

        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn test_get_bid_server_error_is_a_decode_failure() {
        let server = create_mock_server(
            ResponseTemplate::new(500).set_body_string("Erro ao buscar cotação\n"),
        )
        .await;

        let err = CotacaoClient::new(server.uri()).get_bid().await.unwrap_err();

        assert!(matches!(err, ClientError::Json(_)));
    }

    #[tokio::test]
    async fn test_get_bid_unreachable() {
        let err = CotacaoClient::new("http://127.0.0.1:1")
            .get_bid()
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_get_bid_invalid_base_url() {
        let err = CotacaoClient::new("not a url").get_bid().await.unwrap_err();

        assert!(matches!(err, ClientError::Request(_)));
    }
}
