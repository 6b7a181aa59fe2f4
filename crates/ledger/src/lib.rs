//! `coinshop-ledger` — the ledger core.
//!
//! Mutates account balances and records the resulting transfer/purchase facts
//! with all-or-nothing semantics under concurrent access. Correctness rests on
//! one storage-level primitive: a guarded atomic balance adjustment
//! ([`balance::adjust`]) executed inside a transaction per operation. No row
//! locks, no in-process locks, no read-then-write of balances anywhere.

pub mod accounts;
pub mod balance;
pub mod error;
pub mod history;
pub mod ledger;
pub mod storage;

pub use accounts::{Account, AccountRepo};
pub use balance::Adjustment;
pub use error::{LedgerError, LedgerResult};
pub use history::{CoinHistory, InventoryItem, ReceivedCoins, SentCoins};
pub use ledger::Ledger;
