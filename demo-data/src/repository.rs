use crate::entity::Entity;
use crate::error::DataError;
use std::future::Future;

/// Async repository over a single entity type.
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new row and return it with its store-assigned id.
    fn create(&self, draft: &T::Draft) -> impl Future<Output = Result<T, DataError>> + Send;

    /// Every row. An empty table is an empty vector, not an error.
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;

    /// `Ok(None)` when no row has this id.
    fn find_by_id(&self, id: &T::Id) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
}
