//! Regression model implementations
//!
//! [`fit_simple`] is the closed-form bivariate path built on the
//! [`crate::bivariate`] module; [`fit_multiple`] solves the normal equations
//! for any number of regressors. [`fit_formula`] ties either path to a
//! [`Dataset`] through a [`Formula`] and yields a [`FittedModel`] whose
//! `Display` output is a regression summary table.

mod multiple;
mod simple;

pub use multiple::fit_multiple;
pub use simple::fit_simple;

use crate::dataset::Dataset;
use crate::errors::{DataError, DataResult, StatsError, StatsResult};
use crate::formula::Formula;
use crate::types::{FitResult, OlsOptions};
use log::info;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use std::fmt;

/// Two-sided p-value for a t-statistic with `df` degrees of freedom.
pub(crate) fn t_two_sided_p(t: f64, df: f64) -> StatsResult<f64> {
    if !t.is_finite() {
        return Ok(0.0);
    }
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(2.0 * (1.0 - dist.cdf(t.abs())))
}

/// Critical t value for a two-sided confidence interval.
pub(crate) fn t_critical(confidence_level: f64, df: f64) -> StatsResult<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0))
}

/// Upper-tail p-value for an F-statistic.
pub(crate) fn f_pvalue(f: f64, df1: f64, df2: f64) -> StatsResult<f64> {
    if !f.is_finite() {
        return Ok(0.0);
    }
    let dist = FisherSnedecor::new(df1, df2)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok(1.0 - dist.cdf(f.max(0.0)))
}

/// A fitted regression model together with the formula that produced it.
///
/// Printing the model renders a summary table of the fit.
#[derive(Debug, Clone)]
pub struct FittedModel {
    formula: Formula,
    fit: FitResult,
}

/// Fit a regression model described by a formula against a dataset
///
/// A single-term formula uses the closed-form bivariate fit; more terms go
/// through the normal-equations path.
pub fn fit_formula(
    data: &Dataset,
    formula: &Formula,
    options: &OlsOptions,
) -> DataResult<FittedModel> {
    let (y, x) = data.design(formula)?;
    let fit = if x.len() == 1 {
        fit_simple(&y, &x[0], options)?
    } else {
        fit_multiple(&y, &x, options)?
    };
    info!(
        "fitted {} on {} observations, R-squared {:.4}",
        formula, fit.core.n_observations, fit.core.r_squared
    );
    Ok(FittedModel {
        formula: formula.clone(),
        fit,
    })
}

impl FittedModel {
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn result(&self) -> &FitResult {
        &self.fit
    }

    /// Predict responses for new data containing the formula's term columns.
    pub fn predict(&self, data: &Dataset) -> DataResult<Vec<f64>> {
        let intercept = self.fit.core.intercept.unwrap_or(0.0);
        let columns = self
            .formula
            .terms()
            .iter()
            .map(|term| {
                data.column(term)
                    .ok_or_else(|| DataError::UnknownColumn(term.clone()))
            })
            .collect::<DataResult<Vec<_>>>()?;

        let n = data.n_rows();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let mut yi = intercept;
            for (coef, col) in self.fit.core.coefficients.iter().zip(&columns) {
                yi += coef * col[i];
            }
            out.push(yi);
        }
        Ok(out)
    }
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 78;
        let core = &self.fit.core;
        let k = core.n_features + usize::from(core.intercept.is_some());
        let df_res = core.n_observations - k;

        writeln!(f, "{:^WIDTH$}", "OLS Regression Results")?;
        writeln!(f, "{}", "=".repeat(WIDTH))?;
        writeln!(f, "Formula:            {}", self.formula)?;
        writeln!(
            f,
            "No. observations:   {:<12} R-squared:          {:.4}",
            core.n_observations, core.r_squared
        )?;
        writeln!(
            f,
            "Df residuals:       {:<12} Adj. R-squared:     {:.4}",
            df_res, core.adj_r_squared
        )?;
        if let Some(inf) = &self.fit.inference {
            writeln!(
                f,
                "Resid. std error:   {:<12.4} F-statistic:        {:.4} (p = {:.4})",
                core.residual_std_error, inf.f_statistic, inf.f_pvalue
            )?;
        } else {
            writeln!(
                f,
                "Resid. std error:   {:<12.4}",
                core.residual_std_error
            )?;
        }
        if let Some(d) = &self.fit.diagnostics {
            writeln!(f, "AIC:                {:<12.4} BIC:                {:.4}", d.aic, d.bic)?;
        }
        writeln!(f, "{}", "-".repeat(WIDTH))?;

        let mut rows: Vec<(&str, f64)> = Vec::with_capacity(k);
        if let Some(b0) = core.intercept {
            rows.push(("Intercept", b0));
        }
        for (term, coef) in self.formula.terms().iter().zip(&core.coefficients) {
            rows.push((term.as_str(), *coef));
        }

        match &self.fit.inference {
            Some(inf) => {
                let alpha = 1.0 - inf.confidence_level;
                writeln!(
                    f,
                    "{:<14} {:>11} {:>11} {:>9} {:>9} {:>9} {:>9}",
                    "term",
                    "coef",
                    "std err",
                    "t",
                    "P>|t|",
                    format!("[{:.3}", alpha / 2.0),
                    format!("{:.3}]", 1.0 - alpha / 2.0),
                )?;
                for (j, (name, coef)) in rows.iter().enumerate() {
                    writeln!(
                        f,
                        "{:<14} {:>11.4} {:>11.4} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                        name,
                        coef,
                        inf.std_errors[j],
                        inf.t_values[j],
                        inf.p_values[j],
                        inf.ci_lower[j],
                        inf.ci_upper[j],
                    )?;
                }
            }
            None => {
                writeln!(f, "{:<14} {:>11}", "term", "coef")?;
                for (name, coef) in &rows {
                    writeln!(f, "{:<14} {:>11.4}", name, coef)?;
                }
            }
        }
        writeln!(f, "{}", "=".repeat(WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn sample_data() -> Dataset {
        let age: Vec<f64> = (1..=12).map(|i| i as f64).collect();
        let horse: Vec<f64> = age.iter().map(|a| 150.0 + 10.0 * (a % 4.0)).collect();
        let price: Vec<f64> = age
            .iter()
            .zip(&horse)
            .map(|(a, h)| 200.0 - 5.0 * a + 0.2 * h)
            .collect();
        Dataset::from_columns([
            ("age".to_string(), age),
            ("horse".to_string(), horse),
            ("price".to_string(), price),
        ])
        .unwrap()
    }

    #[test]
    fn test_fit_formula_single_term() {
        let data = sample_data();
        let formula = Formula::parse("price ~ age").unwrap();
        let model = fit_formula(&data, &formula, &OlsOptions::default()).unwrap();
        // age and horse are nearly independent, so the slope stays near -5
        assert!((model.result().core.coefficients[0] - (-5.0)).abs() < 1.0);
    }

    #[test]
    fn test_fit_formula_multi_term_recovers_coefficients() {
        let data = sample_data();
        let formula = Formula::parse("price ~ age + horse").unwrap();
        let model = fit_formula(&data, &formula, &OlsOptions::default()).unwrap();
        let core = &model.result().core;
        assert!((core.intercept.unwrap() - 200.0).abs() < 1e-6);
        assert!((core.coefficients[0] - (-5.0)).abs() < 1e-6);
        assert!((core.coefficients[1] - 0.2).abs() < 1e-6);
        assert!((core.r_squared - 1.0).abs() < 1e-8);
    }

    #[test]
    fn test_fit_formula_unknown_column() {
        let data = sample_data();
        let formula = Formula::parse("price ~ cruise").unwrap();
        let err = fit_formula(&data, &formula, &OlsOptions::default()).unwrap_err();
        assert!(matches!(err, DataError::UnknownColumn(_)));
    }

    #[test]
    fn test_predict_matches_fitted() {
        let data = sample_data();
        let formula = Formula::parse("price ~ age + horse").unwrap();
        let model = fit_formula(&data, &formula, &OlsOptions::default()).unwrap();
        let predicted = model.predict(&data).unwrap();
        let observed = data.column("price").unwrap();
        for (p, o) in predicted.iter().zip(observed) {
            assert!((p - o).abs() < 1e-6);
        }
    }

    #[test]
    fn test_summary_contains_terms() {
        let data = sample_data();
        let formula = Formula::parse("price ~ age + horse").unwrap();
        let model = fit_formula(&data, &formula, &OlsOptions::default()).unwrap();
        let text = model.to_string();
        assert!(text.contains("OLS Regression Results"));
        assert!(text.contains("Intercept"));
        assert!(text.contains("age"));
        assert!(text.contains("horse"));
        assert!(text.contains("R-squared"));
    }
}
