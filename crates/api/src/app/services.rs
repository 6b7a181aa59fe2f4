//! Service layer: validation, identity resolution, error classification.
//!
//! Sits between the HTTP handlers and the ledger core. By the time the ledger
//! is invoked, identities are numeric ids and amounts are validated positive.

use std::sync::Arc;

use sqlx::SqlitePool;
use thiserror::Error;

use coinshop_auth::{hash_password, verify_password};
use coinshop_catalog::{Catalog, SqliteCatalog};
use coinshop_core::{Coins, UserId};
use coinshop_ledger::{AccountRepo, CoinHistory, InventoryItem, Ledger, LedgerError};

use crate::jwt::JwtCodec;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("toUser is required")]
    ToUserRequired,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("can't transfer to yourself")]
    SelfTransfer,

    #[error("recipient not found")]
    ReceiverNotFound,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("username and password required")]
    CredentialsRequired,

    #[error("authentication failed")]
    AuthFailed,

    #[error("item type is required")]
    ItemRequired,

    #[error("item not found")]
    ItemNotFound,

    /// Opaque: details are logged, never surfaced to the caller.
    #[error("internal error")]
    Internal,
}

/// Balance + inventory + transfer history for the info endpoint.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub coins: i64,
    pub inventory: Vec<InventoryItem>,
    pub history: CoinHistory,
}

pub struct AppServices {
    ledger: Ledger,
    accounts: AccountRepo,
    catalog: Arc<dyn Catalog>,
    jwt: JwtCodec,
}

impl AppServices {
    pub fn new(pool: SqlitePool, jwt: JwtCodec) -> Self {
        Self {
            ledger: Ledger::new(pool.clone()),
            accounts: AccountRepo::new(pool.clone()),
            catalog: Arc::new(SqliteCatalog::new(pool)),
            jwt,
        }
    }

    pub fn jwt(&self) -> &JwtCodec {
        &self.jwt
    }

    /// Log in, registering the account on first sight of the username.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        if username.is_empty() || password.is_empty() {
            return Err(ServiceError::CredentialsRequired);
        }

        let existing = self
            .accounts
            .find_by_username(username)
            .await
            .map_err(internal("failed to look up account"))?;

        let account = match existing {
            Some(account) => {
                let ok = verify_password(password, &account.password_hash)
                    .map_err(internal("failed to verify credential hash"))?;
                if !ok {
                    return Err(ServiceError::AuthFailed);
                }
                account
            }
            None => {
                let hash =
                    hash_password(password).map_err(internal("failed to hash password"))?;
                self.accounts
                    .create(username, &hash)
                    .await
                    .map_err(internal("failed to create account"))?
            }
        };

        self.jwt
            .mint(account.id, &account.username)
            .map_err(internal("failed to mint token"))
    }

    /// Send coins to another user by display name.
    pub async fn send_coins(
        &self,
        sender: UserId,
        sender_username: &str,
        to_user: &str,
        amount: i64,
    ) -> Result<(), ServiceError> {
        if to_user.is_empty() {
            return Err(ServiceError::ToUserRequired);
        }
        let amount = Coins::new(amount).map_err(|_| ServiceError::InvalidAmount)?;
        if sender_username == to_user {
            return Err(ServiceError::SelfTransfer);
        }

        let receiver = self
            .accounts
            .id_by_username(to_user)
            .await
            .map_err(internal("failed to resolve recipient"))?
            .ok_or(ServiceError::ReceiverNotFound)?;

        match self.ledger.transfer(sender, receiver, amount).await {
            Ok(()) => Ok(()),
            Err(LedgerError::InsufficientFunds) => Err(ServiceError::InsufficientFunds),
            Err(LedgerError::UserNotFound) => Err(ServiceError::ReceiverNotFound),
            Err(e) => Err(internal("transfer failed")(e)),
        }
    }

    /// Buy one unit of a catalog good by name.
    pub async fn buy_good(&self, buyer: UserId, item: &str) -> Result<(), ServiceError> {
        if item.is_empty() {
            return Err(ServiceError::ItemRequired);
        }

        let good = self
            .catalog
            .good_by_name(item)
            .await
            .map_err(internal("failed to look up good"))?
            .ok_or(ServiceError::ItemNotFound)?;

        // Positive by schema constraint on the goods table.
        let price = Coins::new(good.price).map_err(internal("catalog price out of range"))?;

        match self.ledger.purchase(buyer, good.id, price).await {
            Ok(()) => Ok(()),
            Err(LedgerError::InsufficientFunds) => Err(ServiceError::InsufficientFunds),
            Err(e) => Err(internal("purchase failed")(e)),
        }
    }

    /// Balance, inventory and transfer history for the authenticated account.
    pub async fn info(&self, user: UserId) -> Result<AccountInfo, ServiceError> {
        let coins = match self.ledger.balance(user).await {
            Ok(coins) => coins,
            Err(LedgerError::UserNotFound) => {
                // The token was valid, so the account should exist.
                tracing::error!(%user, "account missing for a valid token");
                return Err(ServiceError::Internal);
            }
            Err(e) => return Err(internal("failed to read balance")(e)),
        };

        let inventory = self
            .ledger
            .inventory(user)
            .await
            .map_err(internal("failed to read inventory"))?;
        let history = self
            .ledger
            .history(user)
            .await
            .map_err(internal("failed to read history"))?;

        Ok(AccountInfo {
            coins,
            inventory,
            history,
        })
    }
}

fn internal<E: core::fmt::Display>(context: &'static str) -> impl FnOnce(E) -> ServiceError {
    move |e| {
        tracing::error!(error = %e, "{context}");
        ServiceError::Internal
    }
}
