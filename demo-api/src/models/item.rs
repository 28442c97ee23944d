use demo_data::{Column, ColumnType, Entity, Insertable, SqlValue, TableSchema};
use serde::{Deserialize, Serialize};

/// Declared bound on `items.name`. Part of the column type only: requests
/// are not length-checked and SQLite stores longer names as given.
pub const NAME_MAX_LEN: u32 = 100;

pub static ITEMS: TableSchema = TableSchema {
    name: "items",
    columns: &[
        Column::new("id", ColumnType::Integer).primary_key().indexed(),
        Column::new("name", ColumnType::Varchar(NAME_MAX_LEN)).indexed(),
        Column::new("description", ColumnType::Text),
    ],
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl Entity for Item {
    type Id = i64;
    type Draft = CreateItemRequest;

    fn schema() -> &'static TableSchema {
        &ITEMS
    }
}

/// Body of `POST /items`. Both fields must be present strings; any `id` in
/// the payload is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: String,
}

impl Insertable for CreateItemRequest {
    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.clone().into(), self.description.clone().into()]
    }
}
