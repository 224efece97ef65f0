//! In-memory store implementing both repository traits
//!
//! Mirrors the PostgreSQL semantics closely enough to drive the router in
//! tests and to run the server without a database (`serve --in-memory`):
//! sequential ids starting at 1, foreign-key check on item creation,
//! retrieval order by ascending id, cascade on list delete.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::repos::{DbError, ItemRepository, ListRepository};
use crate::models::{Item, ItemId, List, ListId, NewItem, NewList};

#[derive(Debug, Default)]
struct Tables {
    last_list_id: ListId,
    last_item_id: ItemId,
    lists: BTreeMap<ListId, List>,
    items: BTreeMap<ItemId, Item>,
}

/// Store holding lists and items in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        // no mutation spans a panic point, so a poisoned lock is still consistent
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn get_all(&self) -> Result<Vec<Item>, DbError> {
        Ok(self.tables().items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, DbError> {
        self.tables()
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("item", id))
    }

    async fn create_item(&self, item: NewItem) -> Result<Item, DbError> {
        let mut tables = self.tables();
        if !tables.lists.contains_key(&item.list_id) {
            return Err(DbError::Constraint(format!(
                "list {} does not exist",
                item.list_id
            )));
        }

        tables.last_item_id += 1;
        let now = Utc::now();
        let created = Item {
            id: tables.last_item_id,
            title: item.title,
            item_date: item.item_date,
            content: item.content,
            list_id: item.list_id,
            created_at: now,
            updated_at: now,
        };
        tables.items.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_item(
        &self,
        id: ItemId,
        title: &str,
        item_date: NaiveDate,
        content: &str,
    ) -> Result<(), DbError> {
        let mut tables = self.tables();
        let item = tables
            .items
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("item", id))?;

        item.title = title.to_owned();
        item.item_date = item_date;
        item.content = content.to_owned();
        item.updated_at = Utc::now();
        Ok(())
    }

    async fn delete_item_by_id(&self, id: ItemId) -> Result<(), DbError> {
        self.tables()
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("item", id))
    }
}

#[async_trait]
impl ListRepository for MemoryStore {
    async fn create_list(&self, list: NewList) -> Result<List, DbError> {
        let mut tables = self.tables();
        tables.last_list_id += 1;
        let now = Utc::now();
        let created = List {
            id: tables.last_list_id,
            title: list.title,
            created_at: now,
            updated_at: now,
            items: None,
        };
        tables.lists.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_list(&self, id: ListId) -> Result<List, DbError> {
        let tables = self.tables();
        let list = tables
            .lists
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::not_found("list", id))?;

        let items = tables
            .items
            .values()
            .filter(|item| item.list_id == id)
            .cloned()
            .collect();

        Ok(list.with_items(items))
    }

    async fn get_all_lists(&self) -> Result<Vec<List>, DbError> {
        Ok(self.tables().lists.values().cloned().collect())
    }

    async fn update_title(&self, id: ListId, title: &str) -> Result<List, DbError> {
        let mut tables = self.tables();
        let list = tables
            .lists
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("list", id))?;

        list.title = title.to_owned();
        list.updated_at = Utc::now();
        Ok(list.clone())
    }

    async fn delete_list(&self, id: ListId) -> Result<(), DbError> {
        let mut tables = self.tables();
        if tables.lists.remove(&id).is_none() {
            return Err(DbError::not_found("list", id));
        }
        tables.items.retain(|_, item| item.list_id != id);
        Ok(())
    }
}
