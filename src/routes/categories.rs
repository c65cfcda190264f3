use axum::{
    Json, Router,
    http::{HeaderName, header},
    routing::get,
};

use crate::{dto::categories::CategoriesResponse, services, state::AppState};

/// Intermediate caches may reuse the catalog for five minutes.
const CACHE_DIRECTIVE: &str = "public, max-age=300";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_categories))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "The allowed merchandise categories", body = CategoriesResponse,
         headers(("Cache-Control" = String, description = "public, max-age=300"))),
    ),
    tag = "Categories"
)]
pub async fn get_categories() -> ([(HeaderName, &'static str); 1], Json<CategoriesResponse>) {
    (
        [(header::CACHE_CONTROL, CACHE_DIRECTIVE)],
        Json(services::categories::list_categories()),
    )
}
