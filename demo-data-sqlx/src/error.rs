use demo_data::DataError;

/// Converts driver errors into the data layer's [`DataError`].
///
/// Orphan rules rule out `From<sqlx::Error> for DataError` here, so call
/// `.into_data_error()` at the boundary instead.
///
/// A row that cannot be decoded into its entity is a [`DataError::Mapping`];
/// anything the store itself reports is a [`DataError::Store`].
pub trait SqlxErrorExt {
    fn into_data_error(self) -> DataError;
}

impl SqlxErrorExt for sqlx::Error {
    fn into_data_error(self) -> DataError {
        let undecodable = matches!(
            self,
            sqlx::Error::ColumnNotFound(_)
                | sqlx::Error::ColumnIndexOutOfBounds { .. }
                | sqlx::Error::ColumnDecode { .. }
                | sqlx::Error::Decode(_)
        );
        if undecodable {
            DataError::mapping(self.to_string())
        } else {
            DataError::store(self)
        }
    }
}

pub type SqlxResult<T> = Result<T, DataError>;
