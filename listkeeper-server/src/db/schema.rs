//! Schema bootstrap
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements, safe to run on every
//! start. There is no versioning; changing an existing table is out of scope.

use sqlx::PgPool;

use super::DbError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS lists (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    // no ON DELETE CASCADE: PgListRepo::delete_list removes items itself
    r#"
    CREATE TABLE IF NOT EXISTS items (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        item_date DATE NOT NULL,
        content TEXT NOT NULL,
        list_id BIGINT NOT NULL REFERENCES lists(id),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_items_list_id ON items(list_id)",
];

/// Create the `lists` and `items` tables if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring database schema...");

    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Database schema ready");
    Ok(())
}
