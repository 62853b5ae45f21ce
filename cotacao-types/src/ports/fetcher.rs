//! Quote provider port.
//!
//! This trait defines the interface for exchange-rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use std::time::Duration;

use crate::domain::Quote;

/// Error type for quote fetching.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Upstream timed out after {0:?}")]
    Timeout(Duration),

    #[error("Upstream request failed: {0}")]
    Request(String),

    #[error("Invalid upstream payload: {0}")]
    Decode(String),
}

/// Port trait for quote providers.
#[async_trait::async_trait]
pub trait QuoteFetcher: Send + Sync + 'static {
    /// Fetches the latest USD/BRL quote.
    ///
    /// Implementations do not retry. The caller bounds the call with a deadline
    /// and drops the future when it expires.
    async fn fetch_quote(&self) -> Result<Quote, FetchError>;
}
