//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{items, lists};

/// Database row for a home item (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = items)]
pub struct NewItemRow {
    pub id: String,
    pub name: String,
}

/// Database row for a home item (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ItemRow {
    pub seq: Option<i32>,
    pub id: String,
    pub name: String,
}

/// Database row for a named list. `items` holds the embedded items as JSON.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ListRow {
    pub id: String,
    pub name: String,
    pub items: String,
}
