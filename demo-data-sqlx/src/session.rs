//! Scoped connection acquisition.
//!
//! Every data-layer operation runs inside a [`Session`]: a pooled connection
//! with an open transaction. The session is opened with [`Session::begin`],
//! used for its statement through [`Session::conn`], and closed with
//! [`Session::finish`], which commits or rolls back depending on the
//! statement's outcome and hands the connection back to the pool.
//!
//! A session dropped without `finish` (early return, panic, cancelled future)
//! is rolled back by the driver and its connection is still returned.
//!
//! ```ignore
//! let mut session = Session::begin(&pool).await?;
//! let outcome = sqlx::query("INSERT INTO notes (body) VALUES (?)")
//!     .bind(body)
//!     .execute(session.conn())
//!     .await;
//! session.finish(outcome).await?;
//! ```

use sqlx::{Database, Pool, Transaction};
use tracing::{debug, warn};

use crate::error::{SqlxErrorExt, SqlxResult};

pub struct Session<DB: Database> {
    tx: Transaction<'static, DB>,
}

impl<DB: Database> Session<DB> {
    /// Acquire a connection from the pool and begin a transaction on it.
    pub async fn begin(pool: &Pool<DB>) -> SqlxResult<Self> {
        let tx = pool.begin().await.map_err(|e| e.into_data_error())?;
        debug!("session opened");
        Ok(Self { tx })
    }

    /// Returns a mutable reference to the underlying connection.
    pub fn conn(&mut self) -> &mut <DB as Database>::Connection {
        &mut *self.tx
    }

    /// Close the session according to `outcome`.
    ///
    /// - `Ok`: commits; a failed commit is returned as the error.
    /// - `Err`: rolls back and returns the statement's error.
    ///
    /// The connection is released on every path.
    pub async fn finish<T>(self, outcome: Result<T, sqlx::Error>) -> SqlxResult<T> {
        match outcome {
            Ok(value) => {
                self.tx.commit().await.map_err(|e| e.into_data_error())?;
                debug!("session committed");
                Ok(value)
            }
            Err(err) => {
                match self.tx.rollback().await {
                    Ok(()) => debug!("session rolled back"),
                    // The statement error is the one worth reporting.
                    Err(rollback) => warn!(error = %rollback, "session rollback failed"),
                }
                Err(err.into_data_error())
            }
        }
    }
}
