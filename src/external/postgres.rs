use sqlx::PgPool;

use crate::external::database::{CloudDatabase, CloudDatabaseError};
use crate::models::ProductDto;

/// Production cloud database: the `products` table in PostgreSQL.
#[derive(Clone)]
pub struct PostgresCloudDatabase {
    pool: PgPool,
}

impl PostgresCloudDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CloudDatabase for PostgresCloudDatabase {
    async fn fetch_all(&self) -> Result<Vec<ProductDto>, CloudDatabaseError> {
        let products = sqlx::query_as::<_, ProductDto>(
            "SELECT id, name, description, category, price, stock_count, created_at \
             FROM products ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                CloudDatabaseError::Unreachable(err.to_string())
            }
            other => CloudDatabaseError::Query(other.to_string()),
        })?;

        Ok(products)
    }
}
