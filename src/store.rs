//! SQLite connection, table DDL and the persistence-layer write path.
//! No HTTP route writes; inserts here are used by seeding and tests only.

use crate::error::AppError;
use crate::models::{BakedGood, Bakery, NewBakedGood};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price INTEGER NOT NULL,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        bakery_id INTEGER,
        CONSTRAINT fk_baked_goods_bakery_id_bakeries
            FOREIGN KEY (bakery_id) REFERENCES bakeries (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_baked_goods_price ON baked_goods (price DESC, id)",
    "CREATE INDEX IF NOT EXISTS ix_baked_goods_bakery_id ON baked_goods (bakery_id)",
    // updated_at follows every mutation unless the statement set it explicitly.
    r#"
    CREATE TRIGGER IF NOT EXISTS trg_bakeries_updated_at
    AFTER UPDATE ON bakeries FOR EACH ROW
    WHEN NEW.updated_at = OLD.updated_at
    BEGIN
        UPDATE bakeries SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
    END
    "#,
    r#"
    CREATE TRIGGER IF NOT EXISTS trg_baked_goods_updated_at
    AFTER UPDATE ON baked_goods FOR EACH ROW
    WHEN NEW.updated_at = OLD.updated_at
    BEGIN
        UPDATE baked_goods SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
    END
    "#,
    r#"
    CREATE TRIGGER IF NOT EXISTS trg_bakeries_id_immutable
    BEFORE UPDATE OF id ON bakeries FOR EACH ROW
    WHEN NEW.id <> OLD.id
    BEGIN
        SELECT RAISE(ABORT, 'bakeries.id is immutable');
    END
    "#,
    r#"
    CREATE TRIGGER IF NOT EXISTS trg_baked_goods_id_immutable
    BEFORE UPDATE OF id ON baked_goods FOR EACH ROW
    WHEN NEW.id <> OLD.id
    BEGIN
        SELECT RAISE(ABORT, 'baked_goods.id is immutable');
    END
    "#,
];

/// Open a pool, creating the database file if missing. Foreign keys are enforced on every connection.
/// In-memory databases are pinned to a single long-lived connection so every query sees the same data.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(opts)
            .await?
    };
    Ok(pool)
}

/// Create both tables, their indexes and triggers if they do not exist yet.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        tracing::debug!(sql = %ddl.trim(), "ddl");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

pub async fn insert_bakery(pool: &SqlitePool, name: &str) -> Result<Bakery, AppError> {
    let sql = "INSERT INTO bakeries (name) VALUES (?) RETURNING id, name, created_at, updated_at";
    tracing::debug!(sql = %sql, name = %name, "query");
    let bakery = sqlx::query_as::<_, Bakery>(sql)
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(bakery)
}

/// Fails with a foreign key violation when `bakery_id` names a bakery that does not exist.
pub async fn insert_baked_good(pool: &SqlitePool, good: &NewBakedGood<'_>) -> Result<BakedGood, AppError> {
    let sql = "INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?) \
               RETURNING id, name, price, created_at, updated_at, bakery_id";
    tracing::debug!(sql = %sql, name = %good.name, price = good.price, "query");
    let row = sqlx::query_as::<_, BakedGood>(sql)
        .bind(good.name)
        .bind(good.price)
        .bind(good.bakery_id)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Rename a bakery; the trigger refreshes `updated_at`. Returns the row after the update.
pub async fn rename_bakery(pool: &SqlitePool, id: i64, name: &str) -> Result<Option<Bakery>, AppError> {
    let sql = "UPDATE bakeries SET name = ? WHERE id = ?";
    tracing::debug!(sql = %sql, id, "query");
    let done = sqlx::query(sql).bind(name).bind(id).execute(pool).await?;
    if done.rows_affected() == 0 {
        return Ok(None);
    }
    let row = sqlx::query_as::<_, Bakery>(
        "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

const SAMPLE_DATA: &[(&str, &[(&str, i64)])] = &[
    ("Sweet Treats", &[("Chocolate Croissant", 5), ("Cinnamon Roll", 4)]),
    ("Rise & Shine Bakehouse", &[("Sourdough Loaf", 9), ("Baguette", 3)]),
    ("The Flour Pot", &[("Celebration Cake", 45), ("Lemon Tart", 7)]),
];

/// Insert a small fixed data set when both tables are empty. Returns whether anything was written.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool, AppError> {
    let (bakeries,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bakeries")
        .fetch_one(pool)
        .await?;
    let (goods,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM baked_goods")
        .fetch_one(pool)
        .await?;
    if bakeries > 0 || goods > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    for (bakery_name, items) in SAMPLE_DATA {
        let (bakery_id,): (i64,) = sqlx::query_as("INSERT INTO bakeries (name) VALUES (?) RETURNING id")
            .bind(*bakery_name)
            .fetch_one(&mut *tx)
            .await?;
        for (name, price) in items.iter() {
            sqlx::query("INSERT INTO baked_goods (name, price, bakery_id) VALUES (?, ?, ?)")
                .bind(*name)
                .bind(*price)
                .bind(bakery_id)
                .execute(&mut *tx)
                .await?;
        }
    }
    tx.commit().await?;
    tracing::info!(bakeries = SAMPLE_DATA.len(), "seeded sample data");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = memory_pool().await;
        ensure_tables(&pool).await.unwrap();
        let (n,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('bakeries', 'baked_goods')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(n, 2);
    }

    #[tokio::test]
    async fn insert_stamps_timestamps() {
        let pool = memory_pool().await;
        let bakery = insert_bakery(&pool, "Sweet Treats").await.unwrap();
        assert_eq!(bakery.id, 1);
        assert_eq!(bakery.name, "Sweet Treats");
        assert!(bakery.updated_at >= bakery.created_at);
    }

    #[tokio::test]
    async fn baked_good_requires_existing_bakery() {
        let pool = memory_pool().await;
        let orphan = NewBakedGood { name: "Scone", price: 3, bakery_id: Some(42) };
        assert!(insert_baked_good(&pool, &orphan).await.is_err());

        let unowned = NewBakedGood { name: "Scone", price: 3, bakery_id: None };
        let good = insert_baked_good(&pool, &unowned).await.unwrap();
        assert_eq!(good.bakery_id, None);
    }

    #[tokio::test]
    async fn rename_keeps_updated_at_ahead_of_created_at() {
        let pool = memory_pool().await;
        let bakery = insert_bakery(&pool, "Old Name").await.unwrap();
        let renamed = rename_bakery(&pool, bakery.id, "New Name").await.unwrap().unwrap();
        assert_eq!(renamed.name, "New Name");
        assert_eq!(renamed.created_at, bakery.created_at);
        assert!(renamed.updated_at >= renamed.created_at);
        assert!(rename_bakery(&pool, 999, "Nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_cannot_be_reassigned() {
        let pool = memory_pool().await;
        let bakery = insert_bakery(&pool, "Sweet Treats").await.unwrap();
        let result = sqlx::query("UPDATE bakeries SET id = 7 WHERE id = ?")
            .bind(bakery.id)
            .execute(&pool)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn seed_only_fills_empty_tables() {
        let pool = memory_pool().await;
        assert!(seed_sample_data(&pool).await.unwrap());
        assert!(!seed_sample_data(&pool).await.unwrap());
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bakeries")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(n, 3);
    }
}
