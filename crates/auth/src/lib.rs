//! `coinshop-auth` — authentication primitives.
//!
//! Claims model and deterministic claim validation, plus password hashing.
//! Token signing/verification lives at the transport layer (api crate).

pub mod claims;
pub mod password;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use password::{PasswordError, hash_password, verify_password};
