//! Shared application state.

use std::sync::Arc;

use diesel::SqliteConnection;
use leasing_engine::db::connection::connect_sqlite;
use leasing_engine::error::WorkflowError;

use crate::error::ApiError;

/// State shared by all handlers.
///
/// Holds only the database URL: each request opens its own WAL connection on
/// a blocking thread. SQLite's busy timeout plus the engine's immediate
/// transactions give the serialisation the workflow needs.
#[derive(Clone)]
pub struct AppState {
    database_url: Arc<str>,
}

impl AppState {
    /// Build the state from a database URL.
    pub fn new(database_url: impl Into<Arc<str>>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Run a synchronous engine operation on a blocking thread with a fresh
    /// connection.
    pub async fn run<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T, WorkflowError> + Send + 'static,
    {
        let url = Arc::clone(&self.database_url);
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = connect_sqlite(&url).map_err(ApiError::Internal)?;
            op(&mut conn).map_err(ApiError::Workflow)
        })
        .await
        .map_err(|join_err| ApiError::Internal(anyhow::anyhow!(join_err)))?;
        result
    }
}
