pub mod factories;
pub mod filters;
pub mod models;
pub mod repositories;
pub mod test_utils;


use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the application database named by `DATABASE_PATH`.
///
/// A value that is already a DSN is used as-is; anything else is treated as a
/// SQLite file path and created on first use.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(dir = %parent.display(), error = %e, "could not create database directory");
            }
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    tracing::debug!(url = %url, "connecting to database");
    Database::connect(&url).await
}
