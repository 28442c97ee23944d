/// Failures the data layer reports to its callers.
///
/// A missing row is not an error here: lookups return `Ok(None)` and the
/// caller decides what absence means.
#[derive(Debug)]
pub enum DataError {
    /// The store could not run a statement: unreachable, closed, locked, I/O.
    Store(Box<dyn std::error::Error + Send + Sync>),
    /// An entity's schema, draft values and stored rows disagree.
    Mapping(String),
}

impl DataError {
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Store(Box::new(err))
    }

    pub fn mapping(msg: impl Into<String>) -> Self {
        DataError::Mapping(msg.into())
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Shown as-is; health checks embed it after their own prefix.
            DataError::Store(err) => write!(f, "{err}"),
            DataError::Mapping(msg) => write!(f, "Mapping error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Store(err) => Some(err.as_ref()),
            DataError::Mapping(_) => None,
        }
    }
}
