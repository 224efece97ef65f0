//! List model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::Item;

pub type ListId = i64;

/// A named container of items
///
/// `items` is `None` for list summaries (`get_all_lists`, create, update) and
/// `Some` when the list was fetched individually, even if it holds no items.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct List {
    pub id: ListId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub items: Option<Vec<Item>>,
}

impl List {
    /// Attach items fetched for this list.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Drop any attached items.
    pub fn summary(mut self) -> Self {
        self.items = None;
        self
    }
}

/// Fields supplied by the client when creating a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    /// May be empty
    pub title: String,
}

impl NewList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
