/// Core result from model fitting - always computed
#[derive(Debug, Clone)]
pub struct FitResultCore {
    /// Regression coefficients (excluding intercept)
    pub coefficients: Vec<f64>,
    /// Intercept term (if fitted with intercept)
    pub intercept: Option<f64>,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// Number of observations used
    pub n_observations: usize,
    /// Number of features (excluding intercept)
    pub n_features: usize,
}

/// Inference results - only computed if requested
///
/// Vectors are ordered intercept first (when fitted), then one entry per
/// feature.
#[derive(Debug, Clone)]
pub struct FitResultInference {
    /// Standard errors of coefficients
    pub std_errors: Vec<f64>,
    /// t-statistics for coefficients
    pub t_values: Vec<f64>,
    /// Two-sided p-values for coefficients
    pub p_values: Vec<f64>,
    /// Lower bound of confidence intervals
    pub ci_lower: Vec<f64>,
    /// Upper bound of confidence intervals
    pub ci_upper: Vec<f64>,
    /// Confidence level used (e.g., 0.95)
    pub confidence_level: f64,
    /// F-statistic for overall model significance
    pub f_statistic: f64,
    /// p-value for F-statistic
    pub f_pvalue: f64,
}

/// Diagnostic results
#[derive(Debug, Clone)]
pub struct FitResultDiagnostics {
    /// Residuals (yᵢ - ŷᵢ)
    pub residuals: Vec<f64>,
    /// Fitted values (ŷᵢ)
    pub fitted: Vec<f64>,
    /// Residual sum of squares
    pub rss: f64,
    /// AIC (Akaike Information Criterion)
    pub aic: f64,
    /// BIC (Bayesian Information Criterion)
    pub bic: f64,
}

/// Combined fit result
#[derive(Debug, Clone)]
pub struct FitResult {
    pub core: FitResultCore,
    pub inference: Option<FitResultInference>,
    pub diagnostics: Option<FitResultDiagnostics>,
}

/// Options for OLS fitting
#[derive(Debug, Clone)]
pub struct OlsOptions {
    /// Whether to fit an intercept term
    pub fit_intercept: bool,
    /// Whether to compute inference statistics (std errors, p-values, etc.)
    pub compute_inference: bool,
    /// Confidence level for confidence intervals (default: 0.95)
    pub confidence_level: f64,
}

impl Default for OlsOptions {
    fn default() -> Self {
        Self {
            fit_intercept: true,
            compute_inference: true,
            confidence_level: 0.95,
        }
    }
}
