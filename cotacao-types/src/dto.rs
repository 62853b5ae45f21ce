//! Data Transfer Objects for the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Body of a successful `GET /cotacao` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidResponse {
    pub bid: String,
}

impl BidResponse {
    pub fn new(bid: impl Into<String>) -> Self {
        Self { bid: bid.into() }
    }
}
