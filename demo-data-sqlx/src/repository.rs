use std::marker::PhantomData;

use demo_data::{DataError, Entity, Insertable, Repository, SqlValue};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::error::SqlxResult;
use crate::session::Session;
use crate::sql;

/// A generic SQL-based repository implementation.
///
/// Statements are rendered from the entity's [`TableSchema`](demo_data::TableSchema);
/// rows are decoded with the entity's `sqlx::FromRow` impl. Every operation
/// runs exactly one statement inside its own [`Session`].
///
/// # Example
///
/// ```ignore
/// let repo = SqlxRepository::<User>::new(pool.clone());
/// let users = repo.find_all().await?;
/// ```
pub struct SqlxRepository<T> {
    pool: SqlitePool,
    _marker: PhantomData<T>,
}

impl<T> SqlxRepository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for SqlxRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    values: Vec<SqlValue>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
        };
    }
    query
}

impl<T> Repository<T> for SqlxRepository<T>
where
    T: Entity + for<'r> FromRow<'r, SqliteRow>,
{
    async fn create(&self, draft: &T::Draft) -> SqlxResult<T> {
        let schema = T::schema();
        let values = draft.values();
        let expected = schema.insertable_columns().len();
        if values.len() != expected {
            return Err(DataError::mapping(format!(
                "`{}` expects {expected} insert values, got {}",
                schema.name,
                values.len()
            )));
        }

        let sql = sql::insert_returning(schema);
        let mut session = Session::begin(&self.pool).await?;
        let outcome = bind_all(sqlx::query(&sql), values)
            .fetch_one(session.conn())
            .await
            .and_then(|row| T::from_row(&row));
        session.finish(outcome).await
    }

    async fn find_all(&self) -> SqlxResult<Vec<T>> {
        let sql = sql::select_all(T::schema());
        let mut session = Session::begin(&self.pool).await?;
        let outcome = sqlx::query(&sql)
            .fetch_all(session.conn())
            .await
            .and_then(|rows| rows.iter().map(|row| T::from_row(row)).collect());
        session.finish(outcome).await
    }

    async fn find_by_id(&self, id: &T::Id) -> SqlxResult<Option<T>> {
        let sql = sql::select_by_id(T::schema())?;
        let mut session = Session::begin(&self.pool).await?;
        let outcome = bind_all(sqlx::query(&sql), vec![id.clone().into()])
            .fetch_optional(session.conn())
            .await
            .and_then(|row| row.as_ref().map(|row| T::from_row(row)).transpose());
        session.finish(outcome).await
    }
}
