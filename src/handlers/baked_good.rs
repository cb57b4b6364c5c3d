//! `/baked_goods` handlers.

use crate::error::{AppError, NO_BAKED_GOODS};
use crate::response::{json_ok, BakedGoodView};
use crate::service::BakedGoodService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goods = BakedGoodService::by_price_desc(&state.pool).await?;
    let views: Vec<BakedGoodView> = goods.iter().map(BakedGoodView::from).collect();
    Ok(json_ok(views).into_response())
}

pub async fn most_expensive_baked_good(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let good = BakedGoodService::most_expensive(&state.pool)
        .await?
        .ok_or(AppError::NotFound(NO_BAKED_GOODS))?;
    Ok(json_ok(BakedGoodView::from(&good)).into_response())
}
