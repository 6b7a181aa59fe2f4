//! Ledger error taxonomy.

use thiserror::Error;

/// Result type used across the ledger crate.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Outcome classification for ledger operations.
///
/// Every storage failure is either classified into one of the two
/// business-rule outcomes or propagated as `Storage`; nothing is swallowed.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The guarded debit affected zero rows. By documented precondition the
    /// debited account exists (it was authenticated upstream), so zero rows
    /// means the balance was too low.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The credit target of a transfer does not exist.
    #[error("user not found")]
    UserNotFound,

    /// Any storage-layer failure unrelated to business rules.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
