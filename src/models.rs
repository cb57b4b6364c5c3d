//! Row types for the `bakeries` and `baked_goods` tables.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// A shop. Owns zero or more [`BakedGood`] rows through `baked_goods.bakery_id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A product. `price` is a whole monetary amount with no currency attached.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub bakery_id: Option<i64>,
}

/// Insert payload for [`crate::store::insert_baked_good`]; ids and timestamps come from the database.
#[derive(Debug, Clone)]
pub struct NewBakedGood<'a> {
    pub name: &'a str,
    pub price: i64,
    pub bakery_id: Option<i64>,
}
