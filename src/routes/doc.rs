use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{categories::CategoriesResponse, stock::StockTotalResponse},
    models::ProductDto,
    routes::{categories, health, stock},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::get_categories,
        stock::get_stock_total,
    ),
    components(
        schemas(
            health::HealthData,
            CategoriesResponse,
            StockTotalResponse,
            ProductDto,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Allowed merchandise categories"),
        (name = "Stock", description = "Aggregate stock levels"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
