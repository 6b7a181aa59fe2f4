//! SQLite-backed catalog lookup and seed data.

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use coinshop_core::GoodId;

use crate::good::Good;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Read-only lookup from good name to (id, price).
///
/// Injected as a capability so callers never reach for shared mutable state.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn good_by_name(&self, name: &str) -> Result<Option<Good>, CatalogError>;
}

/// Catalog backed by the `goods` table.
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn good_by_name(&self, name: &str) -> Result<Option<Good>, CatalogError> {
        let row: Option<(i64, String, i64)> =
            sqlx::query_as("SELECT id, name, price FROM goods WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, name, price)| Good {
            id: GoodId::new(id),
            name,
            price,
        }))
    }
}

/// The fixed merch catalog. Reference data only; prices never change at
/// runtime in this system's scope.
const DEFAULT_GOODS: &[(&str, i64)] = &[
    ("t-shirt", 80),
    ("cup", 20),
    ("book", 50),
    ("pen", 10),
    ("powerbank", 200),
    ("hoody", 300),
    ("umbrella", 200),
    ("socks", 10),
    ("wallet", 50),
    ("pink-hoody", 500),
];

/// Idempotently insert the default goods.
pub async fn seed(pool: &SqlitePool) -> Result<(), CatalogError> {
    for (name, price) in DEFAULT_GOODS {
        sqlx::query("INSERT INTO goods (name, price) VALUES (?1, ?2) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .bind(price)
            .execute(pool)
            .await?;
    }
    Ok(())
}
