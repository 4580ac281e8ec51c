//! SQLite plumbing: load datasets into tables, read query results back
//!
//! Thin glue over `rusqlite`. Tables are created with an explicit
//! `CREATE TABLE` and populated row by row with a prepared `INSERT` inside
//! one transaction; query results (joins included) come back as a
//! [`Dataset`] keyed by the result-set column names.

use crate::dataset::Dataset;
use crate::errors::{DataError, DataResult};
use log::{debug, info};
use rusqlite::Connection;
use std::path::Path;

/// Table and column names are spliced into SQL text, so only plain
/// identifiers are accepted.
fn validate_identifier(name: &str) -> DataResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) => {
            (c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DataError::InvalidIdentifier(name.to_string()))
    }
}

/// Create a table holding a dataset and insert every row.
///
/// All columns are declared REAL. An existing table with the same name is an
/// error (no implicit `DROP`).
pub fn create_table_from_dataset(
    conn: &mut Connection,
    table: &str,
    data: &Dataset,
) -> DataResult<()> {
    validate_identifier(table)?;
    for (name, _) in data.columns() {
        validate_identifier(name)?;
    }

    let column_defs = data
        .columns()
        .map(|(name, _)| format!("{name} REAL"))
        .collect::<Vec<_>>()
        .join(", ");
    conn.execute(&format!("CREATE TABLE {table}({column_defs})"), [])?;
    debug!("created table {table}({column_defs})");

    let placeholders = vec!["?"; data.n_cols()].join(", ");
    let insert_sql = format!("INSERT INTO {table} VALUES ({placeholders})");

    let columns: Vec<&[f64]> = data.columns().map(|(_, values)| values).collect();

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&insert_sql)?;
        for i in 0..data.n_rows() {
            stmt.execute(rusqlite::params_from_iter(
                columns.iter().map(|col| col[i]),
            ))?;
        }
    }
    tx.commit()?;

    info!("inserted {} rows into {table}", data.n_rows());
    Ok(())
}

/// Load a CSV file straight into a new table.
pub fn load_csv_into_table(
    conn: &mut Connection,
    table: &str,
    path: impl AsRef<Path>,
) -> DataResult<Dataset> {
    let data = Dataset::from_csv_path(path)?;
    create_table_from_dataset(conn, table, &data)?;
    Ok(data)
}

/// Run a SELECT and materialize the result set as a dataset.
///
/// Column names come from the result set, so aliases and joined columns work
/// as written in the query. Every value must be numeric (or NULL, which
/// becomes NaN and is filtered later by the model-fitting layer).
pub fn query_to_dataset(conn: &Connection, sql: &str) -> DataResult<Dataset> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        for (j, col) in columns.iter_mut().enumerate() {
            let value: Option<f64> = row.get(j)?;
            col.push(value.unwrap_or(f64::NAN));
        }
    }
    debug!(
        "query returned {} rows x {} columns",
        columns.first().map_or(0, Vec::len),
        names.len()
    );

    Dataset::from_columns(names.into_iter().zip(columns))
}
