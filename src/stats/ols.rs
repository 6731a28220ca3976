use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};

use crate::stats::StatsError;

/// A categorical predictor. Levels are sorted; the first one is the
/// treatment-coding reference.
#[derive(Debug, Clone)]
pub struct Factor {
    pub name: String,
    pub levels: Vec<String>,
    pub codes: Vec<usize>,
}

impl Factor {
    pub fn from_labels(name: &str, labels: &[&str]) -> Self {
        let levels = labels
            .iter()
            .map(|l| l.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        let codes = labels
            .iter()
            .map(|l| levels.iter().position(|lv| lv == l).unwrap_or(0))
            .collect();
        Self {
            name: name.to_string(),
            levels,
            codes,
        }
    }

    fn n_dummies(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }
}

/// A model term over factor indices: one index is a main effect, more is an
/// interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub factors: Vec<usize>,
}

impl Term {
    pub fn main(factor: usize) -> Self {
        Self {
            factors: vec![factor],
        }
    }

    pub fn interaction(a: usize, b: usize) -> Self {
        Self {
            factors: vec![a, b],
        }
    }

    /// True when `other` is a higher-order term containing every factor of `self`.
    pub fn is_contained_in(&self, other: &Term) -> bool {
        other.factors.len() > self.factors.len()
            && self.factors.iter().all(|f| other.factors.contains(f))
    }

    pub fn label(&self, factors: &[Factor]) -> String {
        self.factors
            .iter()
            .map(|&i| factors[i].name.as_str())
            .collect::<Vec<_>>()
            .join(":")
    }
}

#[derive(Debug, Clone)]
pub struct OlsFit {
    pub coefficients: Vec<(String, f64)>,
    pub rss: f64,
    pub rank: usize,
    pub n_obs: usize,
}

/// Builds the treatment-coded design matrix for an intercept plus `terms`.
pub fn design_matrix(factors: &[Factor], terms: &[Term], n_obs: usize) -> (DMatrix<f64>, Vec<String>) {
    let mut names = vec!["Intercept".to_string()];
    let mut columns: Vec<Vec<f64>> = vec![vec![1.0; n_obs]];

    for term in terms {
        let mut partial: Vec<(String, Vec<f64>)> = vec![(String::new(), vec![1.0; n_obs])];
        for &fi in &term.factors {
            let factor = &factors[fi];
            let mut next = Vec::with_capacity(partial.len() * factor.n_dummies());
            for (prefix, base) in &partial {
                for level in 1..factor.levels.len() {
                    let name = if prefix.is_empty() {
                        format!("{}[T.{}]", factor.name, factor.levels[level])
                    } else {
                        format!("{}:{}[T.{}]", prefix, factor.name, factor.levels[level])
                    };
                    let col = base
                        .iter()
                        .zip(&factor.codes)
                        .map(|(&v, &code)| if code == level { v } else { 0.0 })
                        .collect();
                    next.push((name, col));
                }
            }
            partial = next;
        }
        for (name, col) in partial {
            names.push(name);
            columns.push(col);
        }
    }

    let n_cols = columns.len();
    let x = DMatrix::from_fn(n_obs, n_cols, |r, c| columns[c][r]);
    (x, names)
}

pub fn fit_ols(y: &[f64], factors: &[Factor], terms: &[Term]) -> Result<OlsFit, StatsError> {
    if y.is_empty() {
        return Err(StatsError::EmptyGroup);
    }
    let n_obs = y.len();
    let (x, names) = design_matrix(factors, terms, n_obs);
    let y_vec = DVector::from_column_slice(y);

    let svd = x.clone().svd(true, true);
    let max_sv = svd.singular_values.iter().cloned().fold(0.0f64, f64::max);
    let tol = max_sv * (n_obs.max(x.ncols()) as f64) * f64::EPSILON;
    let rank = svd.rank(tol);
    let coeffs = svd
        .solve(&y_vec, tol)
        .map_err(|e| StatsError::Solver(e.to_string()))?;

    let residuals = &y_vec - &x * &coeffs;
    let rss = residuals.iter().map(|r| r * r).sum::<f64>();

    Ok(OlsFit {
        coefficients: names.into_iter().zip(coeffs.iter().cloned()).collect(),
        rss,
        rank,
        n_obs,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ols.rs"]
mod tests;
