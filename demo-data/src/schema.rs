//! Explicit table descriptions.
//!
//! A [`TableSchema`] is plain static data: the SQL backend renders DDL and
//! statements from it, and entities point at theirs through
//! [`Entity::schema`](crate::Entity::schema).
//!
//! ```ignore
//! pub static USERS: TableSchema = TableSchema {
//!     name: "users",
//!     columns: &[
//!         Column::new("id", ColumnType::Integer).primary_key().indexed(),
//!         Column::new("email", ColumnType::Varchar(255)).indexed(),
//!     ],
//! };
//! ```

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    /// Bounded text. The bound is declarative; SQLite does not enforce it.
    Varchar(u32),
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub indexed: bool,
}

impl Column {
    /// An unindexed column. Every column is `NOT NULL`.
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary_key: false,
            indexed: false,
        }
    }

    /// Mark the column as the store-assigned primary key.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub const fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Columns a caller supplies on insert, in declaration order.
    ///
    /// The primary key is always assigned by the store and is never part of
    /// this list.
    pub fn insertable_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| !c.primary_key).collect()
    }

    pub fn indexed_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.indexed).collect()
    }

    pub fn index_name(&self, column: &str) -> String {
        format!("ix_{}_{}", self.name, column)
    }
}
