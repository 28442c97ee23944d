//! SQL rendering from [`TableSchema`] descriptions.
//!
//! Identifiers are double-quoted and parameters use SQLite's `?` placeholder.

use demo_data::{ColumnType, DataError, TableSchema};

use crate::error::SqlxResult;

fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn column_type(ty: ColumnType) -> String {
    match ty {
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::Varchar(len) => format!("VARCHAR({len})"),
        ColumnType::Text => "TEXT".to_string(),
    }
}

fn select_list(schema: &TableSchema) -> String {
    schema
        .columns
        .iter()
        .map(|c| quote(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn require_primary_key(schema: &TableSchema) -> SqlxResult<&'static str> {
    schema
        .primary_key()
        .map(|c| c.name)
        .ok_or_else(|| DataError::mapping(format!("table `{}` has no primary key", schema.name)))
}

pub fn create_table(schema: &TableSchema) -> String {
    let columns = schema
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {} NOT NULL", quote(c.name), column_type(c.ty));
            if c.primary_key {
                def.push_str(" PRIMARY KEY");
            }
            def
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS {} ({columns})", quote(schema.name))
}

/// One `CREATE INDEX` per indexed column.
pub fn create_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .indexed_columns()
        .into_iter()
        .map(|c| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                quote(&schema.index_name(c.name)),
                quote(schema.name),
                quote(c.name)
            )
        })
        .collect()
}

/// All rows, ordered by primary key when the table has one.
pub fn select_all(schema: &TableSchema) -> String {
    let mut sql = format!("SELECT {} FROM {}", select_list(schema), quote(schema.name));
    if let Some(pk) = schema.primary_key() {
        sql.push_str(&format!(" ORDER BY {}", quote(pk.name)));
    }
    sql
}

pub fn select_by_id(schema: &TableSchema) -> SqlxResult<String> {
    let pk = require_primary_key(schema)?;
    Ok(format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_list(schema),
        quote(schema.name),
        quote(pk)
    ))
}

/// Insert the insertable columns and read the stored row back in one statement.
pub fn insert_returning(schema: &TableSchema) -> String {
    let insertable = schema.insertable_columns();
    let target = quote(schema.name);
    let returning = select_list(schema);
    if insertable.is_empty() {
        return format!("INSERT INTO {target} DEFAULT VALUES RETURNING {returning}");
    }
    let columns = insertable
        .iter()
        .map(|c| quote(c.name))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; insertable.len()].join(", ");
    format!("INSERT INTO {target} ({columns}) VALUES ({placeholders}) RETURNING {returning}")
}
