//! # Cotacao Types
//!
//! Domain types and port traits for the USD/BRL quote service.
//! This crate has ZERO external IO dependencies - only data structures
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Quote, StoredQuote)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the HTTP boundary
//! - `error/` - Application error type

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Quote, QuoteEnvelope, StoredQuote};
pub use dto::BidResponse;
pub use error::AppError;
pub use ports::{FetchError, QuoteFetcher, QuoteRepository, RepoError};
