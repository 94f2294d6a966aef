//! Schema definitions and migration utilities.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded migration SQL for the students table (001_students.sql).
pub const STUDENTS_MIGRATION: &str = include_str!("../migrations/001_students.sql");

/// Run all migrations against the database.
///
/// Idempotent: every statement checks for existing objects first.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running students migration (001_students.sql)...");
    sqlx::raw_sql(STUDENTS_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Students migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Returns true if the `students` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'students'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
