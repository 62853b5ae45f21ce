//! Error types for the quote service.

use crate::ports::{FetchError, RepoError};

/// Application-level errors (for HTTP responses).
///
/// Each variant records which step of the request failed; both map to a
/// 500 at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to fetch quote: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to store quote: {0}")]
    Store(#[from] RepoError),
}

impl AppError {
    /// Generic message safe to return to HTTP callers.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => "Erro ao buscar cotação",
            AppError::Store(_) => "Erro ao salvar cotação no banco de dados",
        }
    }
}
