//! List repository
//!
//! - get_list: list row + item rows in one REPEATABLE READ snapshot
//! - get_all_lists: list rows only (no per-list item fan-out)
//! - delete_list: items then list in one transaction, rolled back on miss

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, ListRepository};
use crate::models::{Item, List, ListId, NewList};

/// PostgreSQL-backed list repository
#[derive(Debug, Clone)]
pub struct PgListRepo {
    pool: PgPool,
}

impl PgListRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for PgListRepo {
    async fn create_list(&self, list: NewList) -> Result<List, DbError> {
        let created: List = sqlx::query_as(
            r#"
            INSERT INTO lists (title)
            VALUES ($1)
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(&list.title)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(list_id = created.id, "list created");
        Ok(created)
    }

    async fn get_list(&self, id: ListId) -> Result<List, DbError> {
        let mut tx = self.pool.begin().await?;

        // list row and item rows come from one snapshot
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let list: List = sqlx::query_as(
            r#"
            SELECT id, title, created_at, updated_at
            FROM lists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("list", id))?;

        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, title, item_date, content, list_id, created_at, updated_at
            FROM items
            WHERE list_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(list.with_items(items))
    }

    async fn get_all_lists(&self) -> Result<Vec<List>, DbError> {
        let lists: Vec<List> = sqlx::query_as(
            r#"
            SELECT id, title, created_at, updated_at
            FROM lists
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(lists)
    }

    async fn update_title(&self, id: ListId, title: &str) -> Result<List, DbError> {
        sqlx::query_as(
            r#"
            UPDATE lists
            SET title = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, title, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("list", id))
    }

    async fn delete_list(&self, id: ListId) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let items = sqlx::query("DELETE FROM items WHERE list_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let list = sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if list.rows_affected() == 0 {
            // dropping the transaction rolls back the item delete
            return Err(DbError::not_found("list", id));
        }

        tx.commit().await?;
        tracing::debug!(
            list_id = id,
            items_removed = items.rows_affected(),
            "list deleted"
        );
        Ok(())
    }
}
