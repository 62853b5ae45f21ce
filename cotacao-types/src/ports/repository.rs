//! Repository port trait.
//!
//! Adapters (SQLite, in-memory) implement this trait.

use std::time::Duration;

use crate::domain::StoredQuote;

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Database write timed out after {0:?}")]
    Timeout(Duration),
}

/// Append-only store of fetched bids.
#[async_trait::async_trait]
pub trait QuoteRepository: Send + Sync + 'static {
    /// Inserts one row with the bid and the current wall-clock time.
    async fn save_bid(&self, bid: &str) -> Result<StoredQuote, RepoError>;

    /// Lists stored rows, oldest first.
    async fn list_quotes(&self) -> Result<Vec<StoredQuote>, RepoError>;
}
