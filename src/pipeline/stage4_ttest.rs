use serde::Serialize;

use crate::model::factors::{METHOD_PAIRS, Method, Metric};
use crate::model::scores::{ScoreTable, as_f64};
use crate::pipeline::AnalysisError;
use crate::stats::ttest::{TTest, ttest_ind};

#[derive(Debug, Clone, Serialize)]
pub struct PairwiseTest {
    pub metric: Metric,
    pub first: Method,
    pub second: Method,
    pub test: TTest,
}

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub tests: Vec<PairwiseTest>,
}

pub fn compare_methods(
    table: &ScoreTable,
    metric: Metric,
    first: Method,
    second: Method,
) -> Result<PairwiseTest, AnalysisError> {
    let a = as_f64(table.get(metric, first));
    let b = as_f64(table.get(metric, second));
    let test = ttest_ind(&a, &b).map_err(|source| AnalysisError::TTest {
        metric,
        first,
        second,
        source,
    })?;
    Ok(PairwiseTest {
        metric,
        first,
        second,
        test,
    })
}

pub fn run_stage4(table: &ScoreTable) -> Result<Stage4Output, AnalysisError> {
    let mut tests = Vec::with_capacity(Metric::COUNT * METHOD_PAIRS.len());
    for metric in Metric::ALL {
        for (first, second) in METHOD_PAIRS {
            let result = compare_methods(table, metric, first, second)?;
            if result.test.p_value < 0.05 {
                tracing::info!(
                    metric = metric.name(),
                    pair = %format!("{first} vs {second}"),
                    t = result.test.t,
                    p = result.test.p_value,
                    "significant pairwise difference"
                );
            }
            tests.push(result);
        }
    }
    Ok(Stage4Output { tests })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_ttest.rs"]
mod tests;
