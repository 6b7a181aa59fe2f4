//! Balance store: guarded atomic balance adjustment.
//!
//! This is the conditional-update-as-lock technique the whole ledger hangs
//! on: the guard predicate and the write happen in one atomic statement, so
//! two racing debits cannot both observe a stale sufficient balance. It works
//! for any bounded-resource decrement, not just coins.

use coinshop_core::UserId;

/// Whether a guarded adjustment took effect.
///
/// `NotApplied` covers both "guard failed" and "no such account"; the caller
/// disambiguates from context (see [`crate::ledger::Ledger`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Adjustment {
    Applied,
    NotApplied,
}

/// Atomically add `delta` to an account's balance, only if the resulting
/// balance would be non-negative.
///
/// For credits (`delta > 0`) the guard is trivially satisfied on any existing
/// account; for debits it is the sufficient-funds check. Runs on whatever
/// executor the caller supplies, so it can participate in an enclosing
/// transaction.
pub async fn adjust<'e, E>(executor: E, user: UserId, delta: i64) -> Result<Adjustment, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    let result = sqlx::query("UPDATE users SET coins = coins + ?1 WHERE id = ?2 AND coins + ?1 >= 0")
        .bind(delta)
        .bind(user.get())
        .execute(executor)
        .await?;

    Ok(if result.rows_affected() == 0 {
        Adjustment::NotApplied
    } else {
        Adjustment::Applied
    })
}
