use std::sync::Arc;

use crate::external::database::CloudDatabase;

/// Shared application state. The cloud database is held behind a trait
/// object so tests and database-less runs can substitute their own
/// implementation without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<dyn CloudDatabase>,
}

impl AppState {
    pub fn new(database: Arc<dyn CloudDatabase>) -> Self {
        Self { database }
    }
}
