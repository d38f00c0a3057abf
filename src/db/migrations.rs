//! Database initialization.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// How long a connection waits on another writer's lock before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection options for the database file at `db_path`.
pub fn connect_options(db_path: &str) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT)
}

/// Create the database file if needed and ensure the schema exists.
///
/// Safe to call on every start. Returns the options used to open
/// per-request connections afterwards.
pub async fn init_db(db_path: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = connect_options(db_path);
    let mut conn = options.connect().await?;
    let result = run_migrations(&mut conn).await;
    conn.close().await?;
    result?;

    info!("Database initialized successfully at {}", db_path);
    Ok(options)
}

/// Apply `schema.sql` statement by statement.
async fn run_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&mut *conn).await?;
        }
    }

    info!("Migrations completed successfully");
    Ok(())
}
