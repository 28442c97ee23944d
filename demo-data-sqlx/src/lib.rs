//! # demo-data-sqlx: SQLx backend for the Demo API data layer
//!
//! This crate provides the [SQLx](https://github.com/launchbadge/sqlx)-specific
//! implementations for the data access layer. It depends on [`demo-data`] for
//! the abstract traits and schema types, and adds the pool setup, scoped
//! sessions, DDL rendering and error bridging needed to talk to SQLite.
//!
//! # What's in this crate
//!
//! | Item | Description |
//! |------|-------------|
//! | [`connect`] | Builds a `SqlitePool` from a connection string |
//! | [`Session`] | Scoped connection + transaction: commit on success, rollback on failure |
//! | [`SqlxRepository`] | Generic [`Repository`](demo_data::Repository) over any `FromRow` entity |
//! | [`ensure_schema`] | Idempotent `CREATE TABLE` / `CREATE INDEX` from a [`TableSchema`](demo_data::TableSchema) |
//! | [`ping`] | Trivial round-trip used by health checks |
//! | [`SqlxErrorExt`] | `sqlx::Error` to `DataError`: decode failures become `Mapping`, the rest `Store` |
//! | [`SqlxResult<T>`] | `Result<T, DataError>` |
//!
//! # Quick start
//!
//! ```ignore
//! use demo_data_sqlx::{connect, ensure_schema, SqlxRepository};
//!
//! let pool = connect("sqlite://./app.db", 5).await?;
//! ensure_schema(&pool, User::schema()).await?;
//!
//! let repo = SqlxRepository::<User>::new(pool.clone());
//! let users = repo.find_all().await?;
//! ```
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<sqlx::Error> for DataError` can't be
//! implemented here. Use the [`SqlxErrorExt`] trait instead:
//!
//! ```ignore
//! use demo_data_sqlx::SqlxErrorExt;
//!
//! let row = sqlx::query("SELECT ...")
//!     .fetch_one(&pool)
//!     .await
//!     .map_err(|e| e.into_data_error())?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod session;
pub mod sql;

pub use error::{SqlxErrorExt, SqlxResult};
pub use pool::{connect, ping};
pub use repository::SqlxRepository;
pub use schema::ensure_schema;
pub use session::Session;
