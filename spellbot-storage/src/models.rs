//! User record model for persistence.
//!
//! Maps to the `users` table and is used by SqliteUserStore.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One identity observed by the bot, keyed by `chat_id`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Server-assigned row id; 0 until the record has been saved.
    pub id: i64,
    pub telegram_id: i64,
    pub chat_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates an unsaved record with both timestamps set to now.
    pub fn new(
        telegram_id: i64,
        chat_id: i64,
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            telegram_id,
            chat_id,
            username,
            first_name,
            last_name,
            created_at: now,
            updated_at: now,
        }
    }
}
