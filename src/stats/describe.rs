use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub std: f64,
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean.
pub fn sum_sq_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum()
}

/// Population standard deviation (divisor N).
pub fn pop_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    (sum_sq_dev(values) / values.len() as f64).sqrt()
}

pub fn describe(values: &[f64]) -> Summary {
    Summary {
        n: values.len(),
        mean: mean(values),
        std: pop_std(values),
    }
}

pub fn describe_scores(scores: &[u32]) -> Summary {
    let values = scores.iter().map(|&s| s as f64).collect::<Vec<_>>();
    describe(&values)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/describe.rs"]
mod tests;
