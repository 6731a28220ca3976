use serde::Serialize;

use crate::model::factors::{Method, Metric};

/// One participant's ratings, in `Metric::ALL` order.
pub type ResponseRow = [u32; Metric::COUNT];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    columns: [[Vec<u32>; Method::COUNT]; Metric::COUNT],
}

impl ScoreTable {
    pub fn get(&self, metric: Metric, method: Method) -> &[u32] {
        &self.columns[metric.index()][method.index()]
    }

    pub fn push(&mut self, metric: Metric, method: Method, score: u32) {
        self.columns[metric.index()][method.index()].push(score);
    }

    pub fn n_participants(&self, method: Method) -> usize {
        self.columns[0][method.index()].len()
    }

    /// Scores of every method for one metric, concatenated in `Method::ALL` order.
    pub fn pooled(&self, metric: Metric) -> Vec<u32> {
        let mut out = Vec::new();
        for method in Method::ALL {
            out.extend_from_slice(self.get(metric, method));
        }
        out
    }

    pub fn n_observations(&self) -> usize {
        self.columns
            .iter()
            .flat_map(|row| row.iter())
            .map(Vec::len)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LongRecord {
    pub participant: usize,
    pub method: Method,
    pub metric: Metric,
    pub score: u32,
}

pub fn as_f64(scores: &[u32]) -> Vec<f64> {
    scores.iter().map(|&s| s as f64).collect()
}
