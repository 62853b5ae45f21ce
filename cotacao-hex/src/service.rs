//! Quote Application Service
//!
//! Orchestrates the fetch and store ports for one `/cotacao` request.
//! Contains NO infrastructure logic - only ordering and deadlines.

use std::time::Duration;

use cotacao_types::{
    AppError, BidResponse, FetchError, Quote, QuoteFetcher, QuoteRepository, RepoError,
    StoredQuote,
};

/// Deadline for the upstream quote call.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(200);

/// Deadline for the database insert.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);

/// Per-step deadlines, each derived fresh for its own step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub fetch: Duration,
    pub store: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            fetch: FETCH_TIMEOUT,
            store: STORE_TIMEOUT,
        }
    }
}

/// Application service for quote requests.
///
/// Generic over both ports - adapters are injected at compile time.
pub struct QuoteService<F: QuoteFetcher, R: QuoteRepository> {
    fetcher: F,
    repo: R,
    timeouts: Timeouts,
}

impl<F: QuoteFetcher, R: QuoteRepository> QuoteService<F, R> {
    /// Creates a new service with the default deadlines.
    pub fn new(fetcher: F, repo: R) -> Self {
        Self {
            fetcher,
            repo,
            timeouts: Timeouts::default(),
        }
    }

    /// Overrides the per-step deadlines.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Returns a reference to the underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Fetches the latest quote, bounded by the fetch deadline.
    pub async fn fetch_quote(&self) -> Result<Quote, AppError> {
        let quote = tokio::time::timeout(self.timeouts.fetch, self.fetcher.fetch_quote())
            .await
            .map_err(|_| FetchError::Timeout(self.timeouts.fetch))??;
        Ok(quote)
    }

    /// Persists a bid, bounded by the store deadline.
    pub async fn store_bid(&self, bid: &str) -> Result<StoredQuote, AppError> {
        let stored = tokio::time::timeout(self.timeouts.store, self.repo.save_bid(bid))
            .await
            .map_err(|_| RepoError::Timeout(self.timeouts.store))??;
        Ok(stored)
    }

    /// Fetches the current bid and records it.
    ///
    /// Store only runs after a successful fetch. Nothing is retried.
    #[tracing::instrument(skip(self))]
    pub async fn current_bid(&self) -> Result<BidResponse, AppError> {
        let quote = self.fetch_quote().await?;
        let stored = self.store_bid(&quote.bid).await?;

        tracing::info!(id = stored.id, bid = %stored.bid, "Quote stored");
        Ok(BidResponse::new(quote.bid))
    }
}
