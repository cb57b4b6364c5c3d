use super::query_many;
use crate::error::AppError;
use crate::models::BakedGood;
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, price, created_at, updated_at, bakery_id";

pub struct BakedGoodService;

impl BakedGoodService {
    /// All baked goods, most expensive first; equal prices keep id order.
    pub async fn by_price_desc(pool: &SqlitePool) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM baked_goods ORDER BY price DESC, id ASC");
        query_many(pool, &sql).await
    }

    /// The single highest-priced good; ties go to the lowest id. None when the table is empty.
    pub async fn most_expensive(pool: &SqlitePool) -> Result<Option<BakedGood>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM baked_goods ORDER BY price DESC, id ASC LIMIT 1");
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, BakedGood>(&sql)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Goods owned by one bakery (the other side of `baked_goods.bakery_id`).
    pub async fn for_bakery(pool: &SqlitePool, bakery_id: i64) -> Result<Vec<BakedGood>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM baked_goods WHERE bakery_id = ? ORDER BY id");
        tracing::debug!(sql = %sql, bakery_id, "query");
        let rows = sqlx::query_as::<_, BakedGood>(&sql)
            .bind(bakery_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
