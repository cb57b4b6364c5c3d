//! Read queries over the two tables.

mod baked_good;
mod bakery;
pub use baked_good::BakedGoodService;
pub use bakery::BakeryService;

use crate::error::AppError;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

async fn query_many<T>(pool: &SqlitePool, sql: &str) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, T>(sql).fetch_all(pool).await?;
    Ok(rows)
}

async fn query_one_by_id<T>(pool: &SqlitePool, sql: &str, id: i64) -> Result<Option<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, T>(sql).bind(id).fetch_optional(pool).await?;
    Ok(row)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::store::{connect, ensure_tables};
    use sqlx::SqlitePool;

    pub async fn memory_pool() -> SqlitePool {
        let pool = connect("sqlite::memory:", 1).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        pool
    }
}
