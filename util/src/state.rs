//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection pool. Cloning is cheap: SeaORM's
//! `DatabaseConnection` is itself a handle around a shared pool.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an established connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawned tasks or services that need ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
