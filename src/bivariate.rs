//! Bivariate descriptive statistics and closed-form OLS
//!
//! Pure reductions over equal-length `f64` slices: sample variance and
//! covariance with the (n−1) denominator, the ordinary-least-squares slope
//! and intercept for a bivariate linear model, and the sum of squared
//! residuals for given coefficients.
//!
//! Degenerate input is an error, never a sentinel: empty or single-element
//! samples, mismatched lengths, and constant regressors are all reported to
//! the caller as [`StatsError`]. Intercept and residual computation take the
//! fitted coefficients as explicit arguments, so a model can be fitted once
//! and evaluated under alternative hypothetical coefficients.

use crate::errors::{StatsError, StatsResult};

/// Arithmetic mean of a sample.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::mean;
///
/// assert_eq!(mean(&[101.0, 103.0, 94.0, 102.0, 100.0]).unwrap(), 100.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(x: &[f64]) -> StatsResult<f64> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    Ok(x.iter().sum::<f64>() / x.len() as f64)
}

/// Sample variance with Bessel's correction: Σ(xᵢ−x̄)² / (n−1).
///
/// Requires n ≥ 2; a single observation leaves the (n−1) denominator at
/// zero, so shorter samples are an error.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::variance;
///
/// assert_eq!(variance(&[101.0, 103.0, 94.0, 102.0, 100.0]).unwrap(), 12.5);
/// assert_eq!(variance(&[99.0, 101.0, 99.0, 101.0, 99.0, 101.0]).unwrap(), 1.2);
/// assert_eq!(variance(&[4.0, 4.0, 4.0, 4.0]).unwrap(), 0.0);
/// assert!(variance(&[7.0]).is_err());
/// ```
pub fn variance(x: &[f64]) -> StatsResult<f64> {
    if x.len() < 2 {
        return Err(StatsError::InsufficientData {
            n: x.len(),
            needed: 2,
        });
    }
    let x_bar = mean(x)?;
    let ss: f64 = x.iter().map(|xi| (xi - x_bar) * (xi - x_bar)).sum();
    Ok(ss / (x.len() - 1) as f64)
}

/// Sample covariance: Σ(yᵢ−ȳ)(xᵢ−x̄) / (n−1).
///
/// Same denominator convention and n ≥ 2 requirement as [`variance`];
/// `covariance(x, x)` equals `variance(x)`.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::covariance;
///
/// let x = [99.0, 101.0, 99.0, 101.0, 99.0, 101.0];
/// assert_eq!(covariance(&x, &x).unwrap(), 1.2);
/// assert!(covariance(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
/// ```
pub fn covariance(y: &[f64], x: &[f64]) -> StatsResult<f64> {
    if y.len() != x.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_len: x.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::InsufficientData {
            n: x.len(),
            needed: 2,
        });
    }
    let x_bar = mean(x)?;
    let y_bar = mean(y)?;
    let ss: f64 = y
        .iter()
        .zip(x)
        .map(|(yi, xi)| (yi - y_bar) * (xi - x_bar))
        .sum();
    Ok(ss / (x.len() - 1) as f64)
}

/// OLS slope coefficient: covariance(y, x) / variance(x).
///
/// Fails with [`StatsError::ZeroVariance`] when x is constant.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::ols_slope;
///
/// assert_eq!(ols_slope(&[2.0, 2.0, -2.0, -2.0], &[-1.0, -1.0, 1.0, 1.0]).unwrap(), -2.0);
/// assert_eq!(
///     ols_slope(
///         &[102.0, 106.0, 88.0, 104.0, 100.0],
///         &[101.0, 103.0, 94.0, 102.0, 100.0],
///     )
///     .unwrap(),
///     2.0,
/// );
/// assert!(ols_slope(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).is_err());
/// ```
pub fn ols_slope(y: &[f64], x: &[f64]) -> StatsResult<f64> {
    let covar = covariance(y, x)?;
    let var = variance(x)?;
    if var == 0.0 {
        return Err(StatsError::ZeroVariance { field: "x" });
    }
    Ok(covar / var)
}

/// OLS intercept: ȳ − slope·x̄.
///
/// Takes the already-computed slope rather than re-deriving it, so intercept
/// evaluation never fails on a degenerate x; a non-finite slope propagates
/// into the result.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::ols_intercept;
///
/// assert_eq!(
///     ols_intercept(
///         &[102.0, 106.0, 88.0, 104.0, 100.0],
///         &[101.0, 103.0, 94.0, 102.0, 100.0],
///         2.0,
///     )
///     .unwrap(),
///     -100.0,
/// );
/// assert_eq!(
///     ols_intercept(&[2.0, 2.0, -2.0, -2.0], &[-1.0, -1.0, 1.0, 1.0], -2.0).unwrap(),
///     0.0,
/// );
/// ```
pub fn ols_intercept(y: &[f64], x: &[f64], slope: f64) -> StatsResult<f64> {
    if y.len() != x.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_len: x.len(),
        });
    }
    Ok(mean(y)? - slope * mean(x)?)
}

/// Sum of squared residuals: Σ(yᵢ − (intercept + slope·xᵢ))².
///
/// Always ≥ 0, and exactly 0 when every point lies on the line.
///
/// # Examples
///
/// ```
/// use hedonics::bivariate::sum_squared_residuals;
///
/// assert_eq!(
///     sum_squared_residuals(&[2.0, 2.0, 2.0], &[1.0, 1.0, 1.0], 0.5, 0.5).unwrap(),
///     3.0,
/// );
/// assert_eq!(
///     sum_squared_residuals(&[3.0, 0.0, 3.0], &[0.0, 2.0, 2.0], 1.0, 0.5).unwrap(),
///     9.0,
/// );
/// assert_eq!(
///     sum_squared_residuals(&[2.0, 3.0, 4.0], &[1.0, 2.0, 3.0], 1.0, 1.0).unwrap(),
///     0.0,
/// );
/// ```
pub fn sum_squared_residuals(
    y: &[f64],
    x: &[f64],
    intercept: f64,
    slope: f64,
) -> StatsResult<f64> {
    if y.len() != x.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_len: x.len(),
        });
    }
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    Ok(y.iter()
        .zip(x)
        .map(|(yi, xi)| {
            let e = yi - (intercept + slope * xi);
            e * e
        })
        .sum())
}
