//! AwesomeAPI Exchange Rates Adapter
//!
//! Outbound adapter implementing the `QuoteFetcher` port against the public
//! AwesomeAPI endpoint (`/json/last/USD-BRL`).
//!
//! # Example
//! ```no_run
//! use cotacao_types::QuoteFetcher;
//! use exchange_rates::AwesomeApiFetcher;
//!
//! # async fn demo() -> Result<(), cotacao_types::FetchError> {
//! let fetcher = AwesomeApiFetcher::default();
//! let quote = fetcher.fetch_quote().await?;
//! println!("{}", quote.bid);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;

use cotacao_types::{FetchError, Quote, QuoteEnvelope, QuoteFetcher};

/// Public AwesomeAPI endpoint for the latest USD/BRL quote.
pub const DEFAULT_QUOTE_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// `QuoteFetcher` backed by AwesomeAPI.
///
/// Holds a single `reqwest::Client` built at construction time; the deadline is
/// applied by the caller.
#[derive(Debug, Clone)]
pub struct AwesomeApiFetcher {
    url: String,
    http: Client,
}

impl AwesomeApiFetcher {
    /// Creates a fetcher pointed at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    /// Returns the upstream URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for AwesomeApiFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_QUOTE_URL)
    }
}

#[async_trait]
impl QuoteFetcher for AwesomeApiFetcher {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        let request = self
            .http
            .get(&self.url)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        // Status is not checked; error pages fail to parse below.
        let envelope: QuoteEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!(%status, body = %body, "Unparseable upstream payload");
            FetchError::Decode(format!("status {}: {}", status.as_u16(), e))
        })?;

        let quote = envelope.into_quote();
        tracing::debug!(bid = %quote.bid, "Fetched quote");
        Ok(quote)
    }
}
