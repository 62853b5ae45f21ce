//! Quote domain model.
//!
//! Mirrors the upstream exchange-rate payload. Every field is kept as the text
//! the provider sent; nothing is parsed into numbers.

use serde::{Deserialize, Serialize};

/// A USD/BRL quote as returned by the exchange-rate provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub code: String,
    #[serde(rename = "codein")]
    pub code_in: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

/// Upstream response body: the quote nested under its pair key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "USDBRL")]
    pub usdbrl: Quote,
}

impl QuoteEnvelope {
    /// Unwraps the nested quote.
    pub fn into_quote(self) -> Quote {
        self.usdbrl
    }
}
