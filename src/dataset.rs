//! In-memory rectangular datasets of named numeric columns
//!
//! A [`Dataset`] is the hand-off point between the data plumbing (CSV files,
//! SQL query results) and the regression models: ordered `f64` columns of
//! equal length, indexed positionally so that row i lines up across columns.

use crate::bivariate;
use crate::errors::{DataError, DataResult};
use crate::formula::Formula;
use log::debug;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// A rectangular table of named `f64` columns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset from `(name, values)` pairs.
    ///
    /// Fails if any column's length differs from the first's.
    pub fn from_columns(
        columns: impl IntoIterator<Item = (String, Vec<f64>)>,
    ) -> DataResult<Self> {
        let mut out = Vec::new();
        let mut expected = None;
        for (name, values) in columns {
            let expected = *expected.get_or_insert(values.len());
            if values.len() != expected {
                return Err(DataError::RaggedColumns {
                    column: name,
                    len: values.len(),
                    expected,
                });
            }
            out.push(Column { name, values });
        }
        Ok(Self { columns: out })
    }

    /// Read a dataset from a CSV file with a header row.
    ///
    /// Every cell must parse as `f64`; the first offending cell is reported
    /// with its column name and record number.
    pub fn from_csv_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_csv_reader(file)?;
        debug!(
            "loaded {} rows x {} columns from {}",
            dataset.n_rows(),
            dataset.n_cols(),
            path.display()
        );
        Ok(dataset)
    }

    /// Read a dataset from any CSV source with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::new(),
            })
            .collect();

        for (record_idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            for (col, cell) in columns.iter_mut().zip(record.iter()) {
                let value: f64 = cell.parse().map_err(|_| DataError::Parse {
                    column: col.name.clone(),
                    record: record_idx + 1,
                    value: cell.to_string(),
                })?;
                col.values.push(value);
            }
        }

        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in their original order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterate over `(name, values)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.values.as_slice()))
    }

    /// The values of a column, if it exists.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    fn require_column(&self, name: &str) -> DataResult<&[f64]> {
        self.column(name)
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
    }

    /// Extract the response vector and regressor columns named by a formula.
    pub fn design(&self, formula: &Formula) -> DataResult<(Vec<f64>, Vec<Vec<f64>>)> {
        let y = self.require_column(formula.response())?.to_vec();
        let x = formula
            .terms()
            .iter()
            .map(|term| Ok(self.require_column(term)?.to_vec()))
            .collect::<DataResult<Vec<_>>>()?;
        Ok((y, x))
    }

    /// Summary statistics per column: count, mean, std, min, max.
    ///
    /// Columns too short for a standard deviation show it as NaN.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<16} {:>8} {:>12} {:>12} {:>12} {:>12}",
            "column", "count", "mean", "std", "min", "max"
        );
        for col in &self.columns {
            let n = col.values.len();
            let mean = bivariate::mean(&col.values).unwrap_or(f64::NAN);
            let std = bivariate::variance(&col.values)
                .map(f64::sqrt)
                .unwrap_or(f64::NAN);
            let min = col.values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = col
                .values
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let _ = writeln!(
                out,
                "{:<16} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                col.name, n, mean, std, min, max
            );
        }
        out
    }
}
