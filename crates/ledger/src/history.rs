//! History reader: presentation-ready views over the record tables.

use chrono::{DateTime, Utc};
use serde::Serialize;

use coinshop_core::UserId;

use crate::error::LedgerResult;
use crate::ledger::Ledger;

/// A transfer seen from the sender's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct SentCoins {
    pub to_user: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// A transfer seen from the receiver's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ReceivedCoins {
    pub from_user: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// Both directions of an account's transfer history, newest first.
/// The vectors are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CoinHistory {
    pub sent: Vec<SentCoins>,
    pub received: Vec<ReceivedCoins>,
}

/// One distinct good the account has purchased, with the unit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: i64,
}

impl Ledger {
    /// Transfer history for `user`, counterparts rendered by username.
    pub async fn history(&self, user: UserId) -> LedgerResult<CoinHistory> {
        let sent = sqlx::query_as::<_, SentCoins>(
            "SELECT users.username AS to_user, transfers.amount, transfers.created_at \
             FROM transfers \
             JOIN users ON users.id = transfers.to_user_id \
             WHERE transfers.from_user_id = ?1 \
             ORDER BY transfers.created_at DESC, transfers.id DESC",
        )
        .bind(user.get())
        .fetch_all(self.pool())
        .await?;

        let received = sqlx::query_as::<_, ReceivedCoins>(
            "SELECT users.username AS from_user, transfers.amount, transfers.created_at \
             FROM transfers \
             JOIN users ON users.id = transfers.from_user_id \
             WHERE transfers.to_user_id = ?1 \
             ORDER BY transfers.created_at DESC, transfers.id DESC",
        )
        .bind(user.get())
        .fetch_all(self.pool())
        .await?;

        Ok(CoinHistory { sent, received })
    }

    /// Everything `user` has ever bought, aggregated per good and ordered by
    /// good name.
    pub async fn inventory(&self, user: UserId) -> LedgerResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT goods.name AS name, COUNT(purchases.id) AS quantity \
             FROM purchases \
             JOIN goods ON goods.id = purchases.good_id \
             WHERE purchases.user_id = ?1 \
             GROUP BY goods.name \
             ORDER BY goods.name ASC",
        )
        .bind(user.get())
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }
}
