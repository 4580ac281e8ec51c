//! Residual computation and information criteria for fitted models

use crate::errors::{StatsError, StatsResult};

/// Result containing residuals for a fitted model
#[derive(Debug)]
pub struct ResidualsResult {
    /// Raw residuals: e = y - y_hat
    pub raw: Vec<f64>,
    /// Standardized residuals: e / s (if a residual standard error was given)
    pub standardized: Option<Vec<f64>>,
}

/// Compute residuals from observed and predicted values
pub fn compute_residuals(
    y: &[f64],
    y_hat: &[f64],
    residual_std_error: Option<f64>,
) -> StatsResult<ResidualsResult> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if y_hat.len() != y.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_len: y_hat.len(),
        });
    }

    let raw: Vec<f64> = y.iter().zip(y_hat).map(|(yi, yhi)| yi - yhi).collect();

    let standardized = residual_std_error.map(|s| {
        if s > 0.0 {
            raw.iter().map(|e| e / s).collect()
        } else {
            raw.clone()
        }
    });

    Ok(ResidualsResult { raw, standardized })
}

/// Compute AIC (Akaike Information Criterion)
///
/// AIC = n * ln(RSS/n) + 2k
///
/// where n is the number of observations, RSS the residual sum of squares
/// and k the number of parameters (including intercept). Lower AIC indicates
/// better fit accounting for complexity.
pub fn compute_aic(rss: f64, n: usize, k: usize) -> StatsResult<f64> {
    if n == 0 {
        return Err(StatsError::InvalidInput("n must be > 0".into()));
    }
    if rss < 0.0 {
        return Err(StatsError::InvalidInput("RSS must be non-negative".into()));
    }

    // Perfect fit: the log-likelihood diverges.
    if rss == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }

    let n_f = n as f64;
    Ok(n_f * (rss / n_f).ln() + 2.0 * k as f64)
}

/// Compute BIC (Bayesian Information Criterion)
///
/// BIC = n * ln(RSS/n) + k * ln(n)
///
/// BIC penalizes model complexity more heavily than AIC for larger samples.
pub fn compute_bic(rss: f64, n: usize, k: usize) -> StatsResult<f64> {
    if n == 0 {
        return Err(StatsError::InvalidInput("n must be > 0".into()));
    }
    if rss < 0.0 {
        return Err(StatsError::InvalidInput("RSS must be non-negative".into()));
    }

    if rss == 0.0 {
        return Ok(f64::NEG_INFINITY);
    }

    let n_f = n as f64;
    Ok(n_f * (rss / n_f).ln() + k as f64 * n_f.ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_residuals() {
        let y = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y_hat = vec![1.1, 1.9, 3.0, 4.1, 4.9];

        let result = compute_residuals(&y, &y_hat, None).unwrap();

        assert_eq!(result.raw.len(), 5);
        assert!((result.raw[0] - (-0.1)).abs() < 1e-10);
        assert!((result.raw[1] - 0.1).abs() < 1e-10);
        assert!((result.raw[2] - 0.0).abs() < 1e-10);
        assert!(result.standardized.is_none());
    }

    #[test]
    fn test_standardized_residuals() {
        let y = vec![1.0, 2.0, 3.0];
        let y_hat = vec![1.2, 1.8, 3.0];

        let result = compute_residuals(&y, &y_hat, Some(0.1)).unwrap();
        let std_resid = result.standardized.unwrap();
        assert!((std_resid[0] - (-2.0)).abs() < 1e-10);
        assert!((std_resid[1] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_residuals_dimension_mismatch() {
        let result = compute_residuals(&[1.0, 2.0, 3.0], &[1.0, 2.0], None);
        assert!(result.is_err());
    }

    #[test]
    fn test_aic_basic() {
        // AIC = 100 * ln(10/100) + 2*3 ≈ -224.26
        let aic = compute_aic(10.0, 100, 3).unwrap();
        assert!((aic - (-224.2585)).abs() < 0.01);
    }

    #[test]
    fn test_bic_basic() {
        // BIC = 100 * ln(10/100) + 3 * ln(100) ≈ -216.44
        let bic = compute_bic(10.0, 100, 3).unwrap();
        assert!((bic - (-216.4430)).abs() < 0.01);
    }

    #[test]
    fn test_perfect_fit() {
        let aic = compute_aic(0.0, 100, 3).unwrap();
        let bic = compute_bic(0.0, 100, 3).unwrap();
        assert!(aic.is_infinite() && aic < 0.0);
        assert!(bic.is_infinite() && bic < 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_aic(-1.0, 100, 3).is_err());
        assert!(compute_aic(10.0, 0, 3).is_err());
        assert!(compute_bic(-1.0, 100, 3).is_err());
    }
}
