//! `/bakeries` handlers.

use crate::error::{AppError, BAKERY_NOT_FOUND, ROUTE_NOT_FOUND};
use crate::response::{json_ok, BakeryView};
use crate::service::BakeryService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// Only unsigned decimal ids match the route; anything else is an unknown path.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    if id_str.is_empty() || !id_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(ROUTE_NOT_FOUND));
    }
    id_str.parse().map_err(|_| AppError::NotFound(ROUTE_NOT_FOUND))
}

pub async fn list_bakeries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bakeries = BakeryService::list(&state.pool).await?;
    let views: Vec<BakeryView> = bakeries.iter().map(BakeryView::from).collect();
    Ok(json_ok(views).into_response())
}

pub async fn bakery_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let bakery = BakeryService::find(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(BAKERY_NOT_FOUND))?;
    Ok(json_ok(BakeryView::from(&bakery)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_digits_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
        for bad in ["", "-1", "+1", "1.5", "abc", "99999999999999999999"] {
            assert!(matches!(parse_id(bad), Err(AppError::NotFound(ROUTE_NOT_FOUND))), "{bad}");
        }
    }
}
