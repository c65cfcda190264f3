use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stock::StockTotalResponse,
    error::AppResult,
    services,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/total", get(get_stock_total))
}

#[utoipa::path(
    get,
    path = "/api/stock/total",
    responses(
        (status = 200, description = "Total stock across all products", body = StockTotalResponse),
        (status = 500, description = "The product store could not be queried"),
    ),
    tag = "Stock"
)]
pub async fn get_stock_total(State(state): State<AppState>) -> AppResult<Json<StockTotalResponse>> {
    let total = services::stock::stock_total(&state).await?;
    Ok(Json(total))
}
