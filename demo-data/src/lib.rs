pub mod entity;
pub mod error;
pub mod repository;
pub mod schema;
pub mod value;

pub use entity::{Entity, Insertable};
pub use error::DataError;
pub use repository::Repository;
pub use schema::{Column, ColumnType, TableSchema};
pub use value::SqlValue;
