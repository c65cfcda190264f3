use crate::dto::stock::StockTotalResponse;
use crate::error::AppResult;
use crate::models::ProductDto;
use crate::state::AppState;

/// Fetch every product from the cloud database and total the stock counts.
///
/// An empty store totals to 0; a store failure propagates so the caller
/// sees a server error rather than a misleading zero.
pub async fn stock_total(state: &AppState) -> AppResult<StockTotalResponse> {
    let products = state.database.fetch_all().await?;

    Ok(StockTotalResponse {
        stock_item_total: sum_stock(&products),
    })
}

// Widening sum: i32 counts accumulate into i64, so a large catalog cannot
// overflow. Records are counted exactly as delivered, no dedup or clamping.
fn sum_stock(products: &[ProductDto]) -> i64 {
    products.iter().map(|p| i64::from(p.stock_count)).sum()
}
