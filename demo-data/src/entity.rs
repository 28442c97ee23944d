use crate::schema::TableSchema;
use crate::value::SqlValue;

/// Trait representing a database entity backed by a static [`TableSchema`].
///
/// # Example
///
/// ```ignore
/// impl Entity for User {
///     type Id = i64;
///     type Draft = NewUser;
///     fn schema() -> &'static TableSchema { &USERS }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    /// Primary key type, bound as the lookup parameter.
    type Id: Clone + Into<SqlValue> + Send + Sync + 'static;
    /// The shape a caller submits on creation. Never carries the id.
    type Draft: Insertable + Send + Sync;

    fn schema() -> &'static TableSchema;
}

/// Values for a new row.
///
/// `values()` must line up with
/// [`TableSchema::insertable_columns`](crate::TableSchema::insertable_columns).
pub trait Insertable {
    fn values(&self) -> Vec<SqlValue>;
}
