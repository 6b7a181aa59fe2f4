pub mod auth;
pub mod info;
pub mod purchase;
pub mod transfer;
