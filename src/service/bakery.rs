use super::{query_many, query_one_by_id};
use crate::error::AppError;
use crate::models::Bakery;
use sqlx::SqlitePool;

pub struct BakeryService;

impl BakeryService {
    /// Every bakery in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Bakery>, AppError> {
        query_many(
            pool,
            "SELECT id, name, created_at, updated_at FROM bakeries ORDER BY id",
        )
        .await
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Bakery>, AppError> {
        query_one_by_id(
            pool,
            "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
            id,
        )
        .await
    }
}
