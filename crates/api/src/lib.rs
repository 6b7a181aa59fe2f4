//! `coinshop-api` — HTTP surface of the wallet service.
//!
//! Thin collaborators around the ledger core: routing, JSON binding, JWT
//! issuance/validation, config. Identity resolution happens here; the ledger
//! only ever sees numeric ids and validated amounts.

pub mod app;
pub mod config;
pub mod context;
pub mod jwt;
pub mod middleware;
pub mod telemetry;
