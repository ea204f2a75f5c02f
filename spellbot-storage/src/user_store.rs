//! User identity store: idempotent upsert keyed on `chat_id`.
//!
//! External: SQLite via sqlx; the update handler calls `save_user` on every
//! `/start` and `/help` command.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageError;
use crate::models::UserRecord;

/// Identity persistence seam. The production implementation is
/// [`SqliteUserStore`]; tests substitute their own.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts the record, or updates the non-key fields when `chat_id`
    /// already exists. Refreshes `updated_at` and writes the assigned row id
    /// back into `user`; `created_at` keeps its first-insert value.
    async fn save_user(&self, user: &mut UserRecord) -> Result<(), StorageError>;

    /// Closes the underlying pool. Idempotent.
    async fn close(&self);
}

/// SQLite-backed [`UserStore`]; creates the database file and schema on open.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// Opens the database at `database_url` — a filesystem path,
    /// `sqlite::memory:`, or a `file:` URL — creating file and schema if
    /// missing.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        info!(database_url, "Initializing SQLite pool");

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                telegram_id INTEGER NOT NULL,
                chat_id INTEGER NOT NULL UNIQUE,
                username TEXT,
                first_name TEXT,
                last_name TEXT,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_users_telegram_id ON users(telegram_id);
            CREATE INDEX IF NOT EXISTS idx_users_chat_id ON users(chat_id);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn save_user(&self, user: &mut UserRecord) -> Result<(), StorageError> {
        user.updated_at = Utc::now();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (telegram_id, chat_id, username, first_name, last_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                telegram_id = excluded.telegram_id,
                username = excluded.username,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(user.telegram_id)
        .bind(user.chat_id)
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await?;

        user.id = id;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
