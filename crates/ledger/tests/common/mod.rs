use coinshop_core::{GoodId, UserId};
use coinshop_ledger::{AccountRepo, storage};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub struct TestDb {
    // Held so the on-disk database outlives the pool.
    pub _dir: TempDir,
    pub pool: SqlitePool,
}

pub async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite:{}", dir.path().join("ledger.db").display());
    let pool = storage::connect(&url).await.expect("connect");
    storage::migrate(&pool).await.expect("migrate");
    TestDb { _dir: dir, pool }
}

pub async fn create_user(pool: &SqlitePool, username: &str) -> UserId {
    AccountRepo::new(pool.clone())
        .create(username, "test-hash")
        .await
        .expect("create user")
        .id
}

pub async fn insert_good(pool: &SqlitePool, name: &str, price: i64) -> GoodId {
    let result = sqlx::query("INSERT INTO goods (name, price) VALUES (?1, ?2)")
        .bind(name)
        .bind(price)
        .execute(pool)
        .await
        .expect("insert good");
    GoodId::new(result.last_insert_rowid())
}

pub async fn transfer_count(pool: &SqlitePool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM transfers")
        .fetch_one(pool)
        .await
        .expect("count transfers");
    count
}
