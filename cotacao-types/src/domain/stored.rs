use serde::{Deserialize, Serialize};

/// A persisted bid, as written to the `cotacoes` table.
///
/// `timestamp` is the save time (RFC 3339 with offset), not the provider's
/// own quote timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuote {
    pub id: i64,
    pub bid: String,
    pub timestamp: String,
}
