use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::stats::StatsError;
use crate::stats::describe::sum_sq_dev;
use crate::stats::ols::{Factor, OlsFit, Term, fit_ols};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnovaRow {
    pub term: String,
    pub sum_sq: f64,
    pub df: f64,
    pub f_value: Option<f64>,
    pub p_value: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnovaTable {
    pub rows: Vec<AnovaRow>,
    pub r_squared: f64,
    pub residual_std_error: f64,
    pub coefficients: Vec<(String, f64)>,
}

/// Type-II ANOVA: each term is tested against the model holding every term
/// that does not contain it.
pub fn anova_type2(y: &[f64], factors: &[Factor], terms: &[Term]) -> Result<AnovaTable, StatsError> {
    let full = fit_ols(y, factors, terms)?;
    let df_resid = full.n_obs.saturating_sub(full.rank);
    if df_resid == 0 {
        return Err(StatsError::InsufficientObservations(format!(
            "model has {} parameters for {} observations; no residual degrees of freedom",
            full.rank, full.n_obs
        )));
    }
    let tss = sum_sq_dev(y);
    if full.rss <= f64::EPSILON * tss.max(1.0) * full.n_obs as f64 {
        return Err(StatsError::ZeroVariance(
            "model fits the scores exactly; residual sum of squares is zero".to_string(),
        ));
    }
    let mse = full.rss / df_resid as f64;

    let mut rows = Vec::with_capacity(terms.len() + 1);
    for term in terms {
        let reduced_terms = terms
            .iter()
            .filter(|t| *t != term && !term.is_contained_in(t))
            .cloned()
            .collect::<Vec<_>>();
        let mut with_term = reduced_terms.clone();
        with_term.push(term.clone());

        let reduced = fit_ols(y, factors, &reduced_terms)?;
        let augmented = fit_ols(y, factors, &with_term)?;
        rows.push(term_row(term.label(factors), &reduced, &augmented, mse, df_resid)?);
    }

    rows.push(AnovaRow {
        term: "Residual".to_string(),
        sum_sq: full.rss,
        df: df_resid as f64,
        f_value: None,
        p_value: None,
    });

    let r_squared = if tss > 0.0 { 1.0 - full.rss / tss } else { 0.0 };

    Ok(AnovaTable {
        rows,
        r_squared,
        residual_std_error: mse.sqrt(),
        coefficients: full.coefficients,
    })
}

fn term_row(
    label: String,
    reduced: &OlsFit,
    augmented: &OlsFit,
    mse: f64,
    df_resid: usize,
) -> Result<AnovaRow, StatsError> {
    let df = augmented.rank.saturating_sub(reduced.rank);
    // Rounding can leave a tiny negative difference.
    let sum_sq = (reduced.rss - augmented.rss).max(0.0);
    if df == 0 {
        return Ok(AnovaRow {
            term: label,
            sum_sq,
            df: 0.0,
            f_value: None,
            p_value: None,
        });
    }

    let f_value = (sum_sq / df as f64) / mse;
    let dist = FisherSnedecor::new(df as f64, df_resid as f64)
        .map_err(|e| StatsError::Distribution(e.to_string()))?;
    let p_value = dist.sf(f_value).clamp(0.0, 1.0);

    Ok(AnovaRow {
        term: label,
        sum_sq,
        df: df as f64,
        f_value: Some(f_value),
        p_value: Some(p_value),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/anova.rs"]
mod tests;
