use serde::Serialize;

use crate::model::factors::Metric;
use crate::model::scores::ScoreTable;
use crate::stats::describe::{Summary, describe_scores};

#[derive(Debug, Clone, Serialize)]
pub struct PooledMetric {
    pub metric: Metric,
    pub summary: Summary,
}

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub overall: Vec<PooledMetric>,
}

pub fn run_stage5(table: &ScoreTable) -> Stage5Output {
    let overall = Metric::ALL
        .iter()
        .map(|&metric| PooledMetric {
            metric,
            summary: describe_scores(&table.pooled(metric)),
        })
        .collect();
    Stage5Output { overall }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_pooled.rs"]
mod tests;
