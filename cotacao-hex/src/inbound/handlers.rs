//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cotacao_types::{AppError, QuoteFetcher, QuoteRepository};

use crate::QuoteService;

/// Application state shared across handlers.
pub struct AppState<F: QuoteFetcher, R: QuoteRepository> {
    pub service: QuoteService<F, R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Detail stays in the logs; callers get a fixed, newline-terminated line.
        tracing::error!(error = %self.0, "Quote request failed");

        let body = format!("{}\n", self.0.public_message());
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Fetch the current USD/BRL bid, store it, and return it.
#[tracing::instrument(skip(state))]
pub async fn cotacao<F: QuoteFetcher, R: QuoteRepository>(
    State(state): State<Arc<AppState<F, R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let bid = state.service.current_bid().await?;
    Ok(Json(bid))
}
