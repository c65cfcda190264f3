use crate::models::ProductDto;

/// Errors surfaced by a cloud database implementation. These propagate to
/// the caller as server errors; an unreachable store is never reported as
/// an empty product list.
#[derive(Debug, thiserror::Error)]
pub enum CloudDatabaseError {
    #[error("cloud database unreachable: {0}")]
    Unreachable(String),

    #[error("cloud database query failed: {0}")]
    Query(String),
}

/// The external product store the stock endpoints read from.
///
/// One production implementation talks to PostgreSQL; an in-memory one
/// serves tests and database-less runs. Handlers only ever see
/// `Arc<dyn CloudDatabase>`.
#[async_trait::async_trait]
pub trait CloudDatabase: Send + Sync {
    /// Fetch every product record currently known to the store.
    /// May legitimately return an empty list.
    async fn fetch_all(&self) -> Result<Vec<ProductDto>, CloudDatabaseError>;
}
