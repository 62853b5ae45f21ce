//! Database row structs.

use sqlx::FromRow;

use cotacao_types::StoredQuote;

/// Row of the `cotacoes` table.
#[derive(FromRow)]
pub struct DbQuote {
    pub id: i64,
    pub bid: Option<String>,
    pub timestamp: Option<String>,
}

impl DbQuote {
    pub fn into_domain(self) -> StoredQuote {
        StoredQuote {
            id: self.id,
            bid: self.bid.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_default(),
        }
    }
}
