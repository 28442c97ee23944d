use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::{SqlxErrorExt, SqlxResult};
use crate::session::Session;

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool for `url` (`sqlite://path/to.db`, `sqlite::memory:`, ...).
///
/// The database file is created when missing. An in-memory database only
/// lives as long as its connection, so it gets exactly one connection that
/// never idles out; `max_connections` is ignored in that case.
pub async fn connect(url: &str, max_connections: u32) -> SqlxResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .map_err(|e| e.into_data_error())?
        .create_if_missing(true);

    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| e.into_data_error())?;
    info!(%url, "Database pool ready");
    Ok(pool)
}

/// Round-trip a trivial statement through a fresh session.
pub async fn ping(pool: &SqlitePool) -> SqlxResult<()> {
    let mut session = Session::begin(pool).await?;
    let outcome = sqlx::query("SELECT 1")
        .execute(session.conn())
        .await
        .map(|_| ());
    session.finish(outcome).await
}
