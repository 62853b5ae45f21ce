//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use cotacao_types::{QuoteFetcher, QuoteRepository};

use super::handlers::{self, AppState};
use crate::QuoteService;

/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";

/// HTTP Server for the quote API.
pub struct HttpServer<F: QuoteFetcher, R: QuoteRepository> {
    state: Arc<AppState<F, R>>,
}

impl<F: QuoteFetcher, R: QuoteRepository> HttpServer<F, R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: QuoteService<F, R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Returns the service behind the router.
    pub fn service(&self) -> &QuoteService<F, R> {
        &self.state.service
    }

    /// Builds the Axum router.
    pub fn router(&self) -> Router {
        Router::new()
            .route(QUOTE_PATH, get(handlers::cotacao::<F, R>))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
