use demo_data::TableSchema;
use sqlx::SqlitePool;
use tracing::info;

use crate::error::SqlxResult;
use crate::session::Session;
use crate::sql;

/// Create `schema`'s table and indexes if they don't exist yet.
///
/// Safe to call on every startup. Existing tables are left untouched; there
/// is no migration of changed column definitions.
pub async fn ensure_schema(pool: &SqlitePool, schema: &TableSchema) -> SqlxResult<()> {
    let create = sql::create_table(schema);
    let indexes = sql::create_indexes(schema);

    let mut session = Session::begin(pool).await?;
    let outcome = async {
        sqlx::query(&create).execute(session.conn()).await?;
        for stmt in &indexes {
            sqlx::query(stmt).execute(session.conn()).await?;
        }
        Ok::<(), sqlx::Error>(())
    }
    .await;
    session.finish(outcome).await?;

    info!(table = schema.name, indexes = indexes.len(), "Schema ready");
    Ok(())
}
