//! `coinshop-catalog` — read-only reference data for purchasable goods.
//!
//! The catalog is injected into callers as a capability (`Catalog` trait)
//! rather than consulted through process-wide state. Prices are captured by
//! the ledger at purchase time, so nothing here is mutated at runtime.

pub mod good;
pub mod store;

pub use good::Good;
pub use store::{Catalog, CatalogError, SqliteCatalog, seed};
