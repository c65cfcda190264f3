use chrono::Utc;
use uuid::Uuid;

use crate::external::database::{CloudDatabase, CloudDatabaseError};
use crate::models::ProductDto;

/// In-memory cloud database. Holds a fixed product list for the lifetime of
/// the process; used by the integration tests and by `DATA_SOURCE=memory`
/// runs where no PostgreSQL instance is available.
pub struct InMemoryCloudDatabase {
    products: Vec<ProductDto>,
}

impl InMemoryCloudDatabase {
    /// A small sample catalog, one product per allowed category.
    pub fn with_default_catalog() -> Self {
        let products = [
            ("Wristbands 2-pack", "Accessories", 599_i64, 40),
            ("Tour Racket Bag", "Bags", 8999, 12),
            ("Championship Balls (4)", "Balls", 1099, 120),
            ("Performance Polo", "Clothing", 3499, 25),
            ("Graphite Pro Racket", "Rackets", 15999, 8),
        ]
        .into_iter()
        .map(|(name, category, price, stock_count)| ProductDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            category: category.to_string(),
            price,
            stock_count,
            created_at: Utc::now(),
        })
        .collect();

        Self { products }
    }

    pub fn with_products(products: Vec<ProductDto>) -> Self {
        Self { products }
    }

    /// Shorthand for tests that only care about stock counts.
    pub fn with_stock_counts(counts: &[i32]) -> Self {
        let products = counts
            .iter()
            .map(|&stock_count| ProductDto {
                id: Uuid::new_v4(),
                name: format!("Product with stock {stock_count}"),
                description: None,
                category: "Accessories".to_string(),
                price: 1000,
                stock_count,
                created_at: Utc::now(),
            })
            .collect();

        Self { products }
    }
}

#[async_trait::async_trait]
impl CloudDatabase for InMemoryCloudDatabase {
    async fn fetch_all(&self) -> Result<Vec<ProductDto>, CloudDatabaseError> {
        Ok(self.products.clone())
    }
}
