use colored::*;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every pending migration one at a time, printing an aligned status line for each.
pub async fn run_pending_migrations(url: &str) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    let pending = Migrator::get_pending_migrations(&db).await?;
    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return Ok(());
    }

    println!("Running {} migration(s)...", pending.len());
    for migration in pending {
        run_migration(&db, migration.name()).await?;
    }
    Ok(())
}

async fn run_migration(db: &DatabaseConnection, name: &str) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match Migrator::up(db, Some(1)).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(e) => {
            println!("{}", "failed".red());
            Err(e)
        }
    }
}
