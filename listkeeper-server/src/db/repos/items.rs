//! Item repository
//!
//! One statement per operation. Updates and deletes check the affected row
//! count so a missing id surfaces as `NotFound`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use super::{classify, DbError, ItemRepository};
use crate::models::{Item, ItemId, NewItem};

/// PostgreSQL-backed item repository
#[derive(Debug, Clone)]
pub struct PgItemRepo {
    pool: PgPool,
}

impl PgItemRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepo {
    async fn get_all(&self) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, title, item_date, content, list_id, created_at, updated_at
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, DbError> {
        sqlx::query_as(
            r#"
            SELECT id, title, item_date, content, list_id, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("item", id))
    }

    async fn create_item(&self, item: NewItem) -> Result<Item, DbError> {
        let list_id = item.list_id;
        let created: Item = sqlx::query_as(
            r#"
            INSERT INTO items (title, item_date, content, list_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, item_date, content, list_id, created_at, updated_at
            "#,
        )
        .bind(&item.title)
        .bind(item.item_date)
        .bind(&item.content)
        .bind(item.list_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(e, || format!("list {} does not exist", list_id)))?;

        tracing::debug!(item_id = created.id, list_id, "item created");
        Ok(created)
    }

    async fn update_item(
        &self,
        id: ItemId,
        title: &str,
        item_date: NaiveDate,
        content: &str,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET title = $1, item_date = $2, content = $3, updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(title)
        .bind(item_date)
        .bind(content)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("item", id));
        }
        Ok(())
    }

    async fn delete_item_by_id(&self, id: ItemId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("item", id));
        }
        Ok(())
    }
}
