//! SQLite item and list store implementations.
//!
//! The home list lives in the `items` table, one row per item. Named lists
//! live in the `lists` table with their items embedded as a JSON array, so a
//! list is read and written as a single document.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::{with_connection, DbPool};
use crate::adapter::outbound::sqlite::database::model::{ItemRow, ListRow, NewItemRow};
use crate::adapter::outbound::sqlite::database::schema::{items, lists};
use crate::domain::{Item, ItemId, ListId, TodoList};
use crate::error::{Error, Result};
use crate::port::outbound::store::{ItemStore, ListStore};

/// SQLite-backed store for the home list's items.
pub struct SqliteItemStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteItemStore {
    /// Create a new SQLite item store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(item: &Item) -> NewItemRow {
        NewItemRow {
            id: item.id.to_string(),
            name: item.name.clone(),
        }
    }

    fn from_row(row: ItemRow) -> Item {
        Item {
            id: ItemId::from(row.id),
            name: row.name,
        }
    }
}

impl ItemStore for SqliteItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        with_connection(&self.pool, |conn| {
            let rows: Vec<ItemRow> = items::table
                .order(items::seq.asc())
                .select(ItemRow::as_select())
                .load(conn)?;
            Ok(rows.into_iter().map(Self::from_row).collect())
        })
        .await
    }

    async fn seed_if_empty(&self, seed: Vec<Item>) -> Result<bool> {
        let rows: Vec<NewItemRow> = seed.iter().map(Self::to_row).collect();
        with_connection(&self.pool, move |conn| {
            conn.immediate_transaction(|conn| {
                let count: i64 = items::table.count().get_result(conn)?;
                if count > 0 {
                    return Ok(false);
                }
                diesel::insert_into(items::table)
                    .values(&rows)
                    .execute(conn)?;
                Ok(true)
            })
        })
        .await
    }

    async fn insert(&self, item: &Item) -> Result<()> {
        let row = Self::to_row(item);
        with_connection(&self.pool, move |conn| {
            diesel::insert_into(items::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: &ItemId) -> Result<bool> {
        let id = id.to_string();
        with_connection(&self.pool, move |conn| {
            let deleted = diesel::delete(items::table.filter(items::id.eq(&id))).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}

/// SQLite-backed store for named lists.
pub struct SqliteListStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteListStore {
    /// Create a new SQLite list store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(list: &TodoList) -> Result<ListRow> {
        Ok(ListRow {
            id: list.id.to_string(),
            name: list.name.clone(),
            items: serde_json::to_string(&list.items)?,
        })
    }

    fn from_row(row: ListRow) -> Result<TodoList> {
        let items: Vec<Item> = serde_json::from_str(&row.items)?;
        Ok(TodoList {
            id: ListId::from(row.id),
            name: row.name,
            items,
        })
    }

    fn load(conn: &mut SqliteConnection, name: &str) -> Result<Option<TodoList>> {
        let row: Option<ListRow> = lists::table
            .filter(lists::name.eq(name))
            .select(ListRow::as_select())
            .first(conn)
            .optional()?;
        row.map(Self::from_row).transpose()
    }

    /// Load the named list, apply `mutate`, and write its items back, all in
    /// one immediate transaction.
    fn update<T>(
        conn: &mut SqliteConnection,
        name: &str,
        mutate: impl FnOnce(&mut TodoList) -> T,
    ) -> Result<T> {
        conn.immediate_transaction(|conn| {
            let mut list = Self::load(conn, name)?.ok_or_else(|| Error::list_not_found(name))?;
            let outcome = mutate(&mut list);
            let encoded = serde_json::to_string(&list.items)?;
            diesel::update(lists::table.find(list.id.as_str()))
                .set(lists::items.eq(encoded))
                .execute(conn)?;
            Ok(outcome)
        })
    }
}

impl ListStore for SqliteListStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<TodoList>> {
        let name = name.to_string();
        with_connection(&self.pool, move |conn| Self::load(conn, &name)).await
    }

    async fn create(&self, list: &TodoList) -> Result<bool> {
        let row = Self::to_row(list)?;
        with_connection(&self.pool, move |conn| {
            let inserted = diesel::insert_or_ignore_into(lists::table)
                .values(&row)
                .execute(conn)?;
            Ok(inserted > 0)
        })
        .await
    }

    async fn push_item(&self, name: &str, item: &Item) -> Result<()> {
        let name = name.to_string();
        let item = item.clone();
        with_connection(&self.pool, move |conn| {
            Self::update(conn, &name, |list| list.push(item))
        })
        .await
    }

    async fn pull_item(&self, name: &str, id: &ItemId) -> Result<bool> {
        let name = name.to_string();
        let id = id.clone();
        with_connection(&self.pool, move |conn| {
            Self::update(conn, &name, |list| list.pull(&id))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
    use crate::domain::{default_items, DEFAULT_ITEM_NAMES};

    fn setup_test_db() -> DbPool {
        let pool = create_pool(":memory:").expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        pool
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    // -------------------------------------------------------------------------
    // Home items
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn empty_item_store_lists_nothing() {
        let store = SqliteItemStore::new(setup_test_db());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_if_empty_inserts_once() {
        let store = SqliteItemStore::new(setup_test_db());

        assert!(store.seed_if_empty(default_items()).await.unwrap());
        assert!(!store.seed_if_empty(default_items()).await.unwrap());

        let items = store.list().await.unwrap();
        assert_eq!(names(&items), DEFAULT_ITEM_NAMES);
    }

    #[tokio::test]
    async fn items_keep_insertion_order() {
        let store = SqliteItemStore::new(setup_test_db());
        for name in ["c", "a", "b"] {
            store.insert(&Item::new(name)).await.unwrap();
        }
        let items = store.list().await.unwrap();
        assert_eq!(names(&items), vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn item_roundtrip_preserves_id() {
        let store = SqliteItemStore::new(setup_test_db());
        let item = Item::new("Buy milk");
        store.insert(&item).await.unwrap();

        let loaded = store.list().await.unwrap();
        assert_eq!(loaded, vec![item]);
    }

    #[tokio::test]
    async fn remove_deletes_only_target() {
        let store = SqliteItemStore::new(setup_test_db());
        store.seed_if_empty(default_items()).await.unwrap();
        let items = store.list().await.unwrap();

        assert!(store.remove(&items[1].id).await.unwrap());
        assert!(!store.remove(&items[1].id).await.unwrap());

        let remaining = store.list().await.unwrap();
        assert_eq!(remaining, vec![items[0].clone(), items[2].clone()]);
    }

    // -------------------------------------------------------------------------
    // Named lists
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn find_missing_list_returns_none() {
        let store = SqliteListStore::new(setup_test_db());
        assert!(store.find_by_name("Work").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let store = SqliteListStore::new(setup_test_db());
        let list = TodoList::with_defaults("Work");

        assert!(store.create(&list).await.unwrap());
        let loaded = store.find_by_name("Work").await.unwrap().unwrap();
        assert_eq!(loaded, list);
    }

    #[tokio::test]
    async fn list_lookup_is_case_sensitive() {
        let store = SqliteListStore::new(setup_test_db());
        store.create(&TodoList::with_defaults("Work")).await.unwrap();
        assert!(store.find_by_name("work").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_ignores_duplicate_name() {
        let store = SqliteListStore::new(setup_test_db());
        let first = TodoList::with_defaults("Work");
        let second = TodoList::with_defaults("Work");

        assert!(store.create(&first).await.unwrap());
        assert!(!store.create(&second).await.unwrap());

        let loaded = store.find_by_name("Work").await.unwrap().unwrap();
        assert_eq!(loaded.id, first.id);
    }

    #[tokio::test]
    async fn push_item_appends_to_embedded_items() {
        let store = SqliteListStore::new(setup_test_db());
        store.create(&TodoList::with_defaults("Work")).await.unwrap();

        let item = Item::new("Ship it");
        store.push_item("Work", &item).await.unwrap();

        let loaded = store.find_by_name("Work").await.unwrap().unwrap();
        assert_eq!(loaded.items.len(), 4);
        assert_eq!(loaded.items.last(), Some(&item));
    }

    #[tokio::test]
    async fn push_item_to_missing_list_is_not_found() {
        let store = SqliteListStore::new(setup_test_db());
        let err = store
            .push_item("Nowhere", &Item::new("x"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn pull_item_removes_only_target() {
        let store = SqliteListStore::new(setup_test_db());
        let list = TodoList::with_defaults("Work");
        store.create(&list).await.unwrap();

        assert!(store.pull_item("Work", &list.items[0].id).await.unwrap());
        assert!(!store.pull_item("Work", &list.items[0].id).await.unwrap());

        let loaded = store.find_by_name("Work").await.unwrap().unwrap();
        assert_eq!(loaded.items, list.items[1..].to_vec());
    }

    #[tokio::test]
    async fn pull_item_from_missing_list_is_not_found() {
        let store = SqliteListStore::new(setup_test_db());
        let err = store
            .pull_item("Nowhere", &ItemId::from("x"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lists_do_not_share_items_with_home() {
        let pool = setup_test_db();
        let home = SqliteItemStore::new(pool.clone());
        let lists = SqliteListStore::new(pool);

        home.seed_if_empty(default_items()).await.unwrap();
        lists.create(&TodoList::with_defaults("Work")).await.unwrap();
        lists.push_item("Work", &Item::new("only here")).await.unwrap();

        assert_eq!(home.list().await.unwrap().len(), 3);
        assert_eq!(
            lists.find_by_name("Work").await.unwrap().unwrap().items.len(),
            4
        );
    }

    #[tokio::test]
    async fn corrupt_embedded_items_surface_as_error() {
        let pool = setup_test_db();
        {
            let mut conn = pool.get().unwrap();
            diesel::insert_into(lists::table)
                .values(&ListRow {
                    id: "bad".to_string(),
                    name: "Broken".to_string(),
                    items: "not json".to_string(),
                })
                .execute(&mut conn)
                .unwrap();
        }
        let store = SqliteListStore::new(pool);

        let err = store.find_by_name("Broken").await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
