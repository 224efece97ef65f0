//! Repository traits and their PostgreSQL implementations
//!
//! The traits are the seam between handlers and storage: the router holds
//! `Arc<dyn ItemRepository>` / `Arc<dyn ListRepository>`, so tests can swap
//! in [`MemoryStore`](super::MemoryStore).

pub mod items;
pub mod lists;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Item, ItemId, List, ListId, NewItem, NewList};

pub use items::PgItemRepo;
pub use lists::PgListRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A write was rejected by a relational constraint (e.g. unknown list id)
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Persistence for items addressed directly by id
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every item, unfiltered. Empty storage yields an empty vec.
    async fn get_all(&self) -> Result<Vec<Item>, DbError>;

    async fn get_by_id(&self, id: ItemId) -> Result<Item, DbError>;

    /// Insert a new item. Fails with a storage error if `list_id` does not
    /// reference an existing list.
    async fn create_item(&self, item: NewItem) -> Result<Item, DbError>;

    /// Overwrite title, date and content and refresh `updated_at`.
    /// The owning list is never changed.
    async fn update_item(
        &self,
        id: ItemId,
        title: &str,
        item_date: NaiveDate,
        content: &str,
    ) -> Result<(), DbError>;

    async fn delete_item_by_id(&self, id: ItemId) -> Result<(), DbError>;
}

/// Persistence for lists and the items nested under them
#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Insert a list. The returned list has no items attached.
    async fn create_list(&self, list: NewList) -> Result<List, DbError>;

    /// Fetch a list with its items attached (possibly empty).
    async fn get_list(&self, id: ListId) -> Result<List, DbError>;

    /// Every list, without items.
    async fn get_all_lists(&self) -> Result<Vec<List>, DbError>;

    /// Rename a list and return it without items.
    async fn update_title(&self, id: ListId, title: &str) -> Result<List, DbError>;

    /// Delete a list and every item that belongs to it.
    async fn delete_list(&self, id: ListId) -> Result<(), DbError>;
}

/// Translate a foreign-key violation into [`DbError::Constraint`].
pub(crate) fn classify(err: sqlx::Error, context: impl FnOnce() -> String) -> DbError {
    match &err {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            DbError::Constraint(context())
        }
        _ => DbError::Sqlx(err),
    }
}
