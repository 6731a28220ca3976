use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::StatsError;
use crate::stats::describe::{mean, sum_sq_dev};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTest {
    pub t: f64,
    pub df: f64,
    pub p_value: f64,
}

/// Independent two-sample Student t-test, pooled variance, two-sided.
pub fn ttest_ind(a: &[f64], b: &[f64]) -> Result<TTest, StatsError> {
    if a.is_empty() || b.is_empty() {
        return Err(StatsError::EmptyGroup);
    }
    let n_a = a.len() as f64;
    let n_b = b.len() as f64;
    let df = n_a + n_b - 2.0;
    let diff = mean(a) - mean(b);

    if diff == 0.0 {
        return Ok(TTest {
            t: 0.0,
            df,
            p_value: 1.0,
        });
    }
    if df < 1.0 {
        return Err(StatsError::InsufficientObservations(format!(
            "t-test needs at least 3 observations across both groups, got {}",
            a.len() + b.len()
        )));
    }

    let pooled_var = (sum_sq_dev(a) + sum_sq_dev(b)) / df;
    if pooled_var <= 0.0 {
        return Err(StatsError::ZeroVariance(
            "both groups are constant with different means".to_string(),
        ));
    }

    let se = (pooled_var * (1.0 / n_a + 1.0 / n_b)).sqrt();
    let t = diff / se;
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
    let p_value = (2.0 * dist.sf(t.abs())).clamp(0.0, 1.0);

    Ok(TTest { t, df, p_value })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ttest.rs"]
mod tests;
