//! Domain models for the quote service.

pub mod quote;
pub mod stored;

pub use quote::{Quote, QuoteEnvelope};
pub use stored::StoredQuote;
