//! Closed-form bivariate OLS regression

use crate::bivariate;
use crate::diagnostics::{compute_aic, compute_bic, compute_residuals};
use crate::errors::{StatsError, StatsResult};
use crate::models::{f_pvalue, t_critical, t_two_sided_p};
use crate::types::{
    FitResult, FitResultCore, FitResultDiagnostics, FitResultInference, OlsOptions,
};

/// Fit a bivariate OLS regression model in closed form
///
/// The slope and intercept come from [`bivariate::ols_slope`] and
/// [`bivariate::ols_intercept`]; no matrix algebra is involved. Rows where
/// either value is NaN or infinite are dropped before fitting.
///
/// # Arguments
/// * `y` - Response variable (n observations)
/// * `x` - Single regressor (n observations)
/// * `options` - Fitting options
///
/// # Returns
/// * `FitResult` containing coefficients, R-squared, and optionally inference statistics
pub fn fit_simple(y: &[f64], x: &[f64], options: &OlsOptions) -> StatsResult<FitResult> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if y.len() != x.len() {
        return Err(StatsError::DimensionMismatch {
            y_len: y.len(),
            x_len: x.len(),
        });
    }
    if !(options.confidence_level > 0.0 && options.confidence_level < 1.0) {
        return Err(StatsError::InvalidInput(format!(
            "confidence level {} not in (0, 1)",
            options.confidence_level
        )));
    }

    // Filter out rows with NaN/infinite values
    let pairs: Vec<(f64, f64)> = y
        .iter()
        .zip(x)
        .filter(|(yi, xi)| yi.is_finite() && xi.is_finite())
        .map(|(yi, xi)| (*yi, *xi))
        .collect();

    if pairs.is_empty() {
        return Err(StatsError::NoValidData);
    }

    let (yv, xv): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
    let n = yv.len();
    // Parameters: slope, plus intercept when fitted
    let k = if options.fit_intercept { 2 } else { 1 };
    if n <= k {
        return Err(StatsError::InsufficientData { n, needed: k + 1 });
    }

    let (slope, intercept) = if options.fit_intercept {
        let b1 = bivariate::ols_slope(&yv, &xv)?;
        let b0 = bivariate::ols_intercept(&yv, &xv, b1)?;
        (b1, Some(b0))
    } else {
        // Regression through the origin: b = Σxy / Σx²
        let sxx: f64 = xv.iter().map(|v| v * v).sum();
        if sxx == 0.0 {
            return Err(StatsError::ZeroVariance { field: "x" });
        }
        let sxy: f64 = yv.iter().zip(&xv).map(|(a, b)| a * b).sum();
        (sxy / sxx, None)
    };

    let b0 = intercept.unwrap_or(0.0);
    let fitted: Vec<f64> = xv.iter().map(|xi| b0 + slope * xi).collect();
    let residuals = compute_residuals(&yv, &fitted, None)?.raw;
    let rss = bivariate::sum_squared_residuals(&yv, &xv, b0, slope)?;

    // Total sum of squares: centered with an intercept, uncentered without
    let ss_tot = if options.fit_intercept {
        let y_bar = bivariate::mean(&yv)?;
        yv.iter().map(|yi| (yi - y_bar) * (yi - y_bar)).sum()
    } else {
        yv.iter().map(|yi| yi * yi).sum::<f64>()
    };

    let nf = n as f64;
    let df_res = (n - k) as f64;

    let r_squared = if ss_tot > 0.0 { 1.0 - rss / ss_tot } else { 1.0 };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (nf - 1.0) / df_res;

    let mse = rss / df_res;
    let residual_std_error = mse.sqrt();

    let core = FitResultCore {
        coefficients: vec![slope],
        intercept,
        r_squared,
        adj_r_squared,
        residual_std_error,
        n_observations: n,
        n_features: 1,
    };

    let inference = if options.compute_inference {
        let ss_x: f64 = if options.fit_intercept {
            let x_bar = bivariate::mean(&xv)?;
            xv.iter().map(|xi| (xi - x_bar) * (xi - x_bar)).sum()
        } else {
            xv.iter().map(|xi| xi * xi).sum()
        };

        let slope_se = (mse / ss_x).sqrt();
        let t_crit = t_critical(options.confidence_level, df_res)?;

        let mut std_errors = Vec::with_capacity(k);
        let mut t_values = Vec::with_capacity(k);
        let mut p_values = Vec::with_capacity(k);
        let mut ci_lower = Vec::with_capacity(k);
        let mut ci_upper = Vec::with_capacity(k);

        if let Some(b0) = intercept {
            let x_bar = bivariate::mean(&xv)?;
            let intercept_se = (mse * (1.0 / nf + x_bar * x_bar / ss_x)).sqrt();
            let t = if intercept_se > 0.0 {
                b0 / intercept_se
            } else {
                f64::INFINITY
            };
            std_errors.push(intercept_se);
            t_values.push(t);
            p_values.push(t_two_sided_p(t, df_res)?);
            ci_lower.push(b0 - t_crit * intercept_se);
            ci_upper.push(b0 + t_crit * intercept_se);
        }

        let slope_t = if slope_se > 0.0 {
            slope / slope_se
        } else {
            f64::INFINITY
        };
        std_errors.push(slope_se);
        t_values.push(slope_t);
        p_values.push(t_two_sided_p(slope_t, df_res)?);
        ci_lower.push(slope - t_crit * slope_se);
        ci_upper.push(slope + t_crit * slope_se);

        // For a single regressor, F = t²
        let f_statistic = slope_t * slope_t;
        let f_p = f_pvalue(f_statistic, 1.0, df_res)?;

        Some(FitResultInference {
            std_errors,
            t_values,
            p_values,
            ci_lower,
            ci_upper,
            confidence_level: options.confidence_level,
            f_statistic,
            f_pvalue: f_p,
        })
    } else {
        None
    };

    let diagnostics = Some(FitResultDiagnostics {
        aic: compute_aic(rss, n, k)?,
        bic: compute_bic(rss, n, k)?,
        residuals,
        fitted,
        rss,
    });

    Ok(FitResult {
        core,
        inference,
        diagnostics,
    })
}
