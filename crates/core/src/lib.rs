//! `coinshop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod coins;
pub mod error;
pub mod id;

pub use coins::Coins;
pub use error::{DomainError, DomainResult};
pub use id::{GoodId, UserId};
