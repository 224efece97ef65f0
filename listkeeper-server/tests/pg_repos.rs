//! PostgreSQL repository tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p listkeeper-server -- --ignored
//!
//! Each test creates its own list, so they can share one database.

use chrono::NaiveDate;
use sqlx::PgPool;

use listkeeper_server::db::{
    create_pool, ensure_schema, DbError, ItemRepository, ListRepository, PgItemRepo, PgListRepo,
};
use listkeeper_server::models::{NewItem, NewList};

async fn setup() -> (PgItemRepo, PgListRepo, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    ensure_schema(&pool).await.expect("schema bootstrap failed");
    (
        PgItemRepo::new(pool.clone()),
        PgListRepo::new(pool.clone()),
        pool,
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn schema_bootstrap_is_idempotent() {
    let (_, _, pool) = setup().await;
    ensure_schema(&pool).await.expect("second bootstrap failed");
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_then_get_item() {
    let (items, lists, _) = setup().await;
    let list = lists.create_list(NewList::new("pg create")).await.unwrap();
    assert!(list.items.is_none());

    let created = items
        .create_item(NewItem::new("test", date(2025, 10, 8), "desc", list.id))
        .await
        .unwrap();
    let fetched = items.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.title, "test");
    assert_eq!(fetched.item_date, date(2025, 10, 8));
    assert_eq!(fetched.content, "desc");
    assert_eq!(fetched.list_id, list.id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_item_with_unknown_list_is_constraint_error() {
    let (items, _, _) = setup().await;
    let err = items
        .create_item(NewItem::new("orphan", date(2025, 1, 1), "", i64::MAX))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Constraint(_)));
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_and_delete_item() {
    let (items, lists, _) = setup().await;
    let list = lists.create_list(NewList::new("pg update")).await.unwrap();
    let item = items
        .create_item(NewItem::new("a", date(2025, 1, 1), "b", list.id))
        .await
        .unwrap();

    items
        .update_item(item.id, "c", date(2025, 3, 3), "d")
        .await
        .unwrap();
    let updated = items.get_by_id(item.id).await.unwrap();
    assert_eq!(updated.title, "c");
    assert_eq!(updated.list_id, list.id);
    assert!(updated.updated_at >= item.updated_at);

    items.delete_item_by_id(item.id).await.unwrap();
    assert!(items.delete_item_by_id(item.id).await.unwrap_err().is_not_found());
    assert!(items
        .update_item(item.id, "c", date(2025, 3, 3), "d")
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_fetch_and_cascade_delete() {
    let (items, lists, _) = setup().await;
    let list = lists.create_list(NewList::new("pg cascade")).await.unwrap();
    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        let item = items
            .create_item(NewItem::new(title, date(2025, 5, 5), "", list.id))
            .await
            .unwrap();
        ids.push(item.id);
    }

    let fetched = lists.get_list(list.id).await.unwrap();
    let attached: Vec<_> = fetched.items.unwrap().iter().map(|i| i.id).collect();
    assert_eq!(attached, ids);

    let summaries = lists.get_all_lists().await.unwrap();
    assert!(summaries.iter().any(|l| l.id == list.id));
    assert!(summaries.iter().all(|l| l.items.is_none()));

    lists.delete_list(list.id).await.unwrap();
    assert!(lists.get_list(list.id).await.unwrap_err().is_not_found());
    let remaining = items.get_all().await.unwrap();
    assert!(remaining.iter().all(|i| i.list_id != list.id));
    assert!(lists.delete_list(list.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore = "requires database"]
async fn rename_list() {
    let (_, lists, _) = setup().await;
    let list = lists.create_list(NewList::new("before")).await.unwrap();

    let renamed = lists.update_title(list.id, "").await.unwrap();
    assert_eq!(renamed.title, "");
    assert!(renamed.items.is_none());

    assert!(lists
        .update_title(i64::MAX, "x")
        .await
        .unwrap_err()
        .is_not_found());
}
