//! # Cotacao Hex
//!
//! Application service layer and HTTP adapter for the quote service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (fetch then store, each under a deadline)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `F: QuoteFetcher` and `R: QuoteRepository`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod service;


pub use service::{QuoteService, Timeouts};
