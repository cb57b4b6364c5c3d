//! JSON views for the two entities and the response helper every route goes through.
//! Timestamps render as `YYYY-MM-DD HH:MM:SS` on every endpoint.

use crate::models::{BakedGood, Bakery};
use axum::{
    http::{header, StatusCode},
    Json,
};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn timestamp<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}

#[derive(Serialize, Debug)]
pub struct BakeryView<'a> {
    pub id: i64,
    pub name: &'a str,
    #[serde(serialize_with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl<'a> From<&'a Bakery> for BakeryView<'a> {
    fn from(b: &'a Bakery) -> Self {
        BakeryView {
            id: b.id,
            name: &b.name,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// `bakery_id` is deliberately absent from the public shape.
#[derive(Serialize, Debug)]
pub struct BakedGoodView<'a> {
    pub id: i64,
    pub name: &'a str,
    pub price: i64,
    #[serde(serialize_with = "timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(serialize_with = "timestamp")]
    pub updated_at: NaiveDateTime,
}

impl<'a> From<&'a BakedGood> for BakedGoodView<'a> {
    fn from(g: &'a BakedGood) -> Self {
        BakedGoodView {
            id: g.id,
            name: &g.name,
            price: g.price,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// 200 with a compact JSON body and an explicit `Content-Type: application/json`.
pub fn json_ok<T: Serialize>(
    data: T,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], Json<T>) {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(data),
    )
}
