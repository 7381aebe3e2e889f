use std::{str::FromStr, time::Duration};

use sea_query::{ColumnDef, SqliteQueryBuilder, Table};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use tracing::info;

use crate::schema::category::Categories;
use crate::utils::AppError;

pub type ConnectionPool = SqlitePool;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(
        connection_string: &str,
        run_migrations: bool,
    ) -> Result<ConnectionPool, AppError> {
        let options = SqliteConnectOptions::from_str(connection_string)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(20)
            .connect_with(options)
            .await?;

        info!("Connected to database at {connection_string}");

        if run_migrations {
            Self::run_migrations(&pool).await?;
        }

        Ok(pool)
    }

    /// Pool over a private in-memory database.
    ///
    /// The database lives as long as its single connection, so the pool never
    /// recycles it.
    pub async fn new_in_memory_pool() -> Result<ConnectionPool, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &ConnectionPool) -> Result<(), AppError> {
        let sql = Table::create()
            .table(Categories::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Categories::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Categories::Name).string_len(200).not_null())
            .build(SqliteQueryBuilder);

        sqlx::query(&sql).execute(pool).await?;

        info!("Migrations applied");
        Ok(())
    }
}
