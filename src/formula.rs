//! Model formulas of the form `response ~ term1 + term2`

use crate::errors::{DataError, DataResult};
use std::fmt;

/// A parsed model formula: one response column regressed on a sum of terms.
///
/// # Examples
///
/// ```
/// use hedonics::formula::Formula;
///
/// let f = Formula::parse("price ~ age + passengers").unwrap();
/// assert_eq!(f.response(), "price");
/// assert_eq!(f.terms(), ["age", "passengers"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    response: String,
    terms: Vec<String>,
}

impl Formula {
    /// Parse a formula string. Whitespace around names is ignored.
    pub fn parse(text: &str) -> DataResult<Self> {
        let mut sides = text.splitn(2, '~');
        let lhs = sides.next().unwrap_or("").trim();
        let rhs = match sides.next() {
            Some(rhs) => rhs.trim(),
            None => {
                return Err(DataError::InvalidFormula(format!(
                    "'{text}' has no '~' separator"
                )))
            }
        };

        if lhs.is_empty() {
            return Err(DataError::InvalidFormula(format!(
                "'{text}' has no response variable"
            )));
        }
        if rhs.contains('~') {
            return Err(DataError::InvalidFormula(format!(
                "'{text}' has more than one '~'"
            )));
        }

        let mut terms = Vec::new();
        for term in rhs.split('+') {
            let term = term.trim();
            if term.is_empty() {
                return Err(DataError::InvalidFormula(format!(
                    "'{text}' has an empty term"
                )));
            }
            if terms.iter().any(|t| t == term) {
                return Err(DataError::InvalidFormula(format!(
                    "term '{term}' appears more than once"
                )));
            }
            terms.push(term.to_string());
        }
        if terms.is_empty() {
            return Err(DataError::InvalidFormula(format!(
                "'{text}' has no regressor terms"
            )));
        }

        Ok(Self {
            response: lhs.to_string(),
            terms,
        })
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.response, self.terms.join(" + "))
    }
}
