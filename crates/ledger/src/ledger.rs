//! Transfer and Purchase: the two atomic units of work.

use chrono::Utc;
use sqlx::SqlitePool;

use coinshop_core::{Coins, GoodId, UserId};

use crate::balance::{self, Adjustment};
use crate::error::{LedgerError, LedgerResult};

/// The ledger core. Cheap to clone; all state lives in the pool.
#[derive(Clone)]
pub struct Ledger {
    pool: SqlitePool,
}

impl Ledger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Move `amount` coins from `sender` to `receiver` and record the fact.
    ///
    /// Preconditions owned by the caller: `sender != receiver`, and the
    /// sender's existence was established upstream (authentication), which is
    /// why a zero-row debit is classified as insufficient funds.
    ///
    /// All three steps commit together or not at all; an early return drops
    /// the transaction, which rolls back any applied debit.
    pub async fn transfer(
        &self,
        sender: UserId,
        receiver: UserId,
        amount: Coins,
    ) -> LedgerResult<()> {
        let amount = amount.get();
        let mut tx = self.pool.begin().await?;

        if balance::adjust(&mut *tx, sender, -amount).await? == Adjustment::NotApplied {
            tracing::debug!(%sender, %receiver, amount, "transfer rejected: insufficient funds");
            return Err(LedgerError::InsufficientFunds);
        }

        if balance::adjust(&mut *tx, receiver, amount).await? == Adjustment::NotApplied {
            tracing::debug!(%sender, %receiver, "transfer rejected: receiver does not exist");
            return Err(LedgerError::UserNotFound);
        }

        sqlx::query(
            "INSERT INTO transfers (from_user_id, to_user_id, amount, created_at) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(sender.get())
        .bind(receiver.get())
        .bind(amount)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Debit `buyer` by `price` and record one unit purchase of `good`.
    ///
    /// `price` is the catalog value resolved at invocation time; prices are
    /// static in this system's scope, so it is not re-read inside the unit.
    pub async fn purchase(&self, buyer: UserId, good: GoodId, price: Coins) -> LedgerResult<()> {
        let price = price.get();
        let mut tx = self.pool.begin().await?;

        if balance::adjust(&mut *tx, buyer, -price).await? == Adjustment::NotApplied {
            tracing::debug!(%buyer, %good, price, "purchase rejected: insufficient funds");
            return Err(LedgerError::InsufficientFunds);
        }

        sqlx::query("INSERT INTO purchases (user_id, good_id, created_at) VALUES (?1, ?2, ?3)")
            .bind(buyer.get())
            .bind(good.get())
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Current balance of an account.
    pub async fn balance(&self, user: UserId) -> LedgerResult<i64> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT coins FROM users WHERE id = ?1")
            .bind(user.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(coins,)| coins).ok_or(LedgerError::UserNotFound)
    }
}
