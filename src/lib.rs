//! # hedonics
//!
//! Bivariate statistics and hedonic price regression over SQLite-backed
//! tabular data.
//!
//! The numeric core is [`bivariate`]: sample variance and covariance with
//! the (n-1) denominator, the closed-form OLS slope and intercept, and the
//! sum of squared residuals. These are pure functions over equal-length
//! `f64` slices that report degenerate input as errors instead of
//! fabricating values.
//!
//! Around that core sits the workflow of a typical price-analysis exercise:
//!
//! - [`dataset`]: named numeric columns loaded from CSV files or SQL
//!   query results
//! - [`db`]: SQLite table creation, row insertion, and SELECT-to-dataset
//!   materialization (joins included)
//! - [`formula`]: `price ~ age + passengers` model descriptions
//! - [`models`]: closed-form and normal-equations OLS fitting with optional
//!   inference statistics and a printable summary table
//! - [`diagnostics`]: residuals, AIC, BIC

pub mod bivariate;
pub mod dataset;
pub mod db;
pub mod diagnostics;
pub mod errors;
pub mod formula;
pub mod models;
pub mod types;

pub use dataset::Dataset;
pub use errors::{DataError, DataResult, StatsError, StatsResult};
pub use formula::Formula;
pub use models::{fit_formula, fit_multiple, fit_simple, FittedModel};
pub use types::*;
