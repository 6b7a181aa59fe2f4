//! Account repository: registration-time creation and identity resolution.
//!
//! Balances are read here but only ever written through
//! [`crate::balance::adjust`] inside the ledger operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use coinshop_core::UserId;

use crate::error::LedgerResult;

/// An account row: identity plus coin balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub coins: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AccountRepo {
    pool: SqlitePool,
}

impl AccountRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an account with the starting balance (schema default).
    pub async fn create(&self, username: &str, password_hash: &str) -> LedgerResult<Account> {
        let created_at = Utc::now();
        let result =
            sqlx::query("INSERT INTO users (username, password_hash, created_at) VALUES (?1, ?2, ?3)")
                .bind(username)
                .bind(password_hash)
                .bind(created_at)
                .execute(&self.pool)
                .await?;

        let id = UserId::new(result.last_insert_rowid());
        let (coins,): (i64,) = sqlx::query_as("SELECT coins FROM users WHERE id = ?1")
            .bind(id.get())
            .fetch_one(&self.pool)
            .await?;

        Ok(Account {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            coins,
            created_at,
        })
    }

    pub async fn find_by_username(&self, username: &str) -> LedgerResult<Option<Account>> {
        let row: Option<(i64, String, String, i64, DateTime<Utc>)> = sqlx::query_as(
            "SELECT id, username, password_hash, coins, created_at FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, username, password_hash, coins, created_at)| Account {
            id: UserId::new(id),
            username,
            password_hash,
            coins,
            created_at,
        }))
    }

    /// Resolve a username to its account id without loading the full row.
    pub async fn id_by_username(&self, username: &str) -> LedgerResult<Option<UserId>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id,)| UserId::new(id)))
    }
}
