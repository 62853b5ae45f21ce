//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use chrono::{Local, SecondsFormat};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use cotacao_types::{QuoteRepository, RepoError, StoredQuote};

use crate::types::DbQuote;

const CREATE_TABLE: &str = include_str!("../migrations/0001_create_cotacoes.sql");

fn db_error(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

/// Save-time timestamp, RFC 3339 with the local offset (`Z` when UTC).
pub fn now_timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// SQLite repository implementation.
///
/// The pool is shared by all requests and serialises access on its own.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Connects and creates the `cotacoes` table if it does not exist.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let repo = Self { pool };
        repo.create_schema().await?;

        tracing::debug!(database_url, "SQLite repository ready");
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `cotacoes` table. Idempotent.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}

#[async_trait]
impl QuoteRepository for SqliteRepo {
    async fn save_bid(&self, bid: &str) -> Result<StoredQuote, RepoError> {
        let timestamp = now_timestamp();

        // Dropping `tx` before commit (deadline expiry) rolls the insert back.
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let result = sqlx::query(r#"INSERT INTO cotacoes (bid, timestamp) VALUES (?, ?)"#)
            .bind(bid)
            .bind(&timestamp)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        Ok(StoredQuote {
            id: result.last_insert_rowid(),
            bid: bid.to_string(),
            timestamp,
        })
    }

    async fn list_quotes(&self) -> Result<Vec<StoredQuote>, RepoError> {
        let rows: Vec<DbQuote> =
            sqlx::query_as(r#"SELECT id, bid, timestamp FROM cotacoes ORDER BY id ASC"#)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(DbQuote::into_domain).collect())
    }
}
