//! Multi-regressor OLS via the normal equations

use crate::diagnostics::{compute_aic, compute_bic, compute_residuals};
use crate::errors::{StatsError, StatsResult};
use crate::models::{f_pvalue, t_critical, t_two_sided_p};
use crate::types::{
    FitResult, FitResultCore, FitResultDiagnostics, FitResultInference, OlsOptions,
};

/// Fit an OLS regression model with one or more regressors
///
/// Solves X'Xβ = X'y with an intercept column prepended (when requested) by
/// Gauss-Jordan elimination with partial pivoting. Rows containing NaN or
/// infinite values in the response or any regressor are dropped before
/// fitting.
///
/// # Arguments
/// * `y` - Response variable (n observations)
/// * `x` - Regressors (p columns, each with n observations)
/// * `options` - Fitting options
///
/// # Returns
/// * `FitResult` containing coefficients, R-squared, and optionally inference statistics
pub fn fit_multiple(y: &[f64], x: &[Vec<f64>], options: &OlsOptions) -> StatsResult<FitResult> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    if !(options.confidence_level > 0.0 && options.confidence_level < 1.0) {
        return Err(StatsError::InvalidInput(format!(
            "confidence level {} not in (0, 1)",
            options.confidence_level
        )));
    }

    let n_obs = y.len();
    let n_features = x.len();

    for col in x {
        if col.len() != n_obs {
            return Err(StatsError::DimensionMismatch {
                y_len: n_obs,
                x_len: col.len(),
            });
        }
    }

    // Filter out rows with NaN/infinite values
    let valid_indices: Vec<usize> = (0..n_obs)
        .filter(|&i| y[i].is_finite() && x.iter().all(|col| col[i].is_finite()))
        .collect();

    if valid_indices.is_empty() {
        return Err(StatsError::NoValidData);
    }

    let n = valid_indices.len();
    // Parameters: one per regressor, plus intercept when fitted
    let k = if options.fit_intercept {
        n_features + 1
    } else {
        n_features
    };
    if n <= k {
        return Err(StatsError::InsufficientData { n, needed: k + 1 });
    }

    let yv: Vec<f64> = valid_indices.iter().map(|&i| y[i]).collect();

    // Design-matrix accessor: column 0 is the intercept when fitted
    let design = |row: usize, col: usize| -> f64 {
        if options.fit_intercept {
            if col == 0 {
                1.0
            } else {
                x[col - 1][valid_indices[row]]
            }
        } else {
            x[col][valid_indices[row]]
        }
    };

    // X'X (k × k) and X'y (k)
    let mut xtx = vec![vec![0.0; k]; k];
    let mut xty = vec![0.0; k];
    for i in 0..n {
        for j in 0..k {
            let x_ij = design(i, j);
            xty[j] += x_ij * yv[i];
            for l in j..k {
                xtx[j][l] += x_ij * design(i, l);
            }
        }
    }
    // Mirror the upper triangle
    for j in 0..k {
        for l in 0..j {
            xtx[j][l] = xtx[l][j];
        }
    }

    let xtx_inv = invert_matrix(&xtx).ok_or(StatsError::SingularMatrix)?;

    // β = (X'X)⁻¹ X'y
    let beta: Vec<f64> = (0..k)
        .map(|j| (0..k).map(|l| xtx_inv[j][l] * xty[l]).sum())
        .collect();

    let fitted: Vec<f64> = (0..n)
        .map(|i| (0..k).map(|j| beta[j] * design(i, j)).sum())
        .collect();
    let residuals = compute_residuals(&yv, &fitted, None)?.raw;
    let rss: f64 = residuals.iter().map(|e| e * e).sum();

    let ss_tot = if options.fit_intercept {
        let y_bar = yv.iter().sum::<f64>() / n as f64;
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

    let (intercept, coefficients) = if options.fit_intercept {
        (Some(beta[0]), beta[1..].to_vec())
    } else {
        (None, beta.clone())
    };

    let core = FitResultCore {
        coefficients,
        intercept,
        r_squared,
        adj_r_squared,
        residual_std_error,
        n_observations: n,
        n_features,
    };

    let inference = if options.compute_inference {
        let t_crit = t_critical(options.confidence_level, df_res)?;

        let mut std_errors = Vec::with_capacity(k);
        let mut t_values = Vec::with_capacity(k);
        let mut p_values = Vec::with_capacity(k);
        let mut ci_lower = Vec::with_capacity(k);
        let mut ci_upper = Vec::with_capacity(k);

        // SE(βⱼ) = sqrt(diag((X'X)⁻¹)ⱼ · MSE)
        for (j, &b_j) in beta.iter().enumerate() {
            let se = (xtx_inv[j][j] * mse).sqrt();
            let t = if se > 0.0 { b_j / se } else { f64::INFINITY };
            std_errors.push(se);
            t_values.push(t);
            p_values.push(t_two_sided_p(t, df_res)?);
            ci_lower.push(b_j - t_crit * se);
            ci_upper.push(b_j + t_crit * se);
        }

        // F = (SS_reg / p) / MSE
        let ss_reg = ss_tot - rss;
        let pf = n_features as f64;
        let f_statistic = if mse > 0.0 { (ss_reg / pf) / mse } else { f64::INFINITY };
        let f_p = f_pvalue(f_statistic, pf, df_res)?;

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

/// Matrix inversion by Gauss-Jordan elimination with partial pivoting
fn invert_matrix(mat: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = mat.len();
    if n == 0 {
        return None;
    }

    // Augmented matrix [A | I]
    let mut aug: Vec<Vec<f64>> = mat
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut new_row = row.clone();
            new_row.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            new_row
        })
        .collect();

    for col in 0..n {
        // Find pivot
        let mut max_row = col;
        let mut max_val = aug[col][col].abs();
        for (row, aug_row) in aug.iter().enumerate().skip(col + 1) {
            if aug_row[col].abs() > max_val {
                max_val = aug_row[col].abs();
                max_row = row;
            }
        }

        if max_val < 1e-14 {
            return None; // Singular matrix
        }

        if max_row != col {
            aug.swap(col, max_row);
        }

        // Scale pivot row
        let pivot = aug[col][col];
        for v in aug[col].iter_mut() {
            *v /= pivot;
        }

        // Eliminate column
        for row in 0..n {
            if row != col {
                let factor = aug[row][col];
                for j in 0..(2 * n) {
                    aug[row][j] -= factor * aug[col][j];
                }
            }
        }
    }

    Some(aug.iter().map(|row| row[n..].to_vec()).collect())
}
