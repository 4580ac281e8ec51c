use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("Insufficient data: {n} observations (need at least {needed})")]
    InsufficientData { n: usize, needed: usize },

    #[error("Dimension mismatch: y has {y_len} elements, x has {x_len}")]
    DimensionMismatch { y_len: usize, x_len: usize },

    #[error("Zero variance: {field} is constant, slope is undefined")]
    ZeroVariance { field: &'static str },

    #[error("All rows filtered due to NaN/infinite values")]
    NoValidData,

    #[error("Matrix is singular or near-singular")]
    SingularMatrix,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Distribution error: {0}")]
    Distribution(String),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors that can occur while loading or querying tabular data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse '{value}' in column '{column}' (record {record}) as a number")]
    Parse {
        column: String,
        record: usize,
        value: String,
    },

    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    #[error("Ragged data: column '{column}' has {len} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        len: usize,
        expected: usize,
    },

    #[error("Invalid identifier '{0}': only letters, digits and underscores are allowed")]
    InvalidIdentifier(String),

    #[error("Invalid formula: {0}")]
    InvalidFormula(String),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Result type for data loading and querying
pub type DataResult<T> = Result<T, DataError>;
