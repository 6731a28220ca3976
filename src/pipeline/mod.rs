pub mod stage1_parse;
pub mod stage2_reshape;
pub mod stage3_summary;
pub mod stage4_ttest;
pub mod stage5_pooled;
pub mod stage6_anova;
pub mod stage7_report;

use thiserror::Error;

use crate::input::{InputError, RawSamples};
use crate::model::factors::{Method, Metric};
use crate::model::scores::ScoreTable;
use crate::stats::StatsError;
use stage1_parse::run_stage1;
use stage2_reshape::run_stage2;
use stage3_summary::{Stage3Output, run_stage3};
use stage4_ttest::{Stage4Output, run_stage4};
use stage5_pooled::{Stage5Output, run_stage5};
use stage6_anova::{Stage6Output, run_stage6};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("t-test failed for {metric} ({first} vs {second}): {source}")]
    TTest {
        metric: Metric,
        first: Method,
        second: Method,
        source: StatsError,
    },
    #[error("ANOVA failed: {source}")]
    Anova { source: StatsError },
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub sources: [String; Method::COUNT],
    pub strict: bool,
    pub table: ScoreTable,
    pub stage3: Stage3Output,
    pub stage4: Stage4Output,
    pub stage5: Stage5Output,
    pub stage6: Stage6Output,
}

pub fn run_analysis(samples: &RawSamples, strict: bool) -> Result<Analysis, AnalysisError> {
    let stage1 = run_stage1(samples, strict)?;
    let table = run_stage2(&stage1);
    tracing::info!(
        observations = table.n_observations(),
        overhand = table.n_participants(Method::Overhand),
        underhand = table.n_participants(Method::Underhand),
        side = table.n_participants(Method::Side),
        "built score table"
    );

    let stage3 = run_stage3(&table);
    let stage4 = run_stage4(&table)?;
    let stage5 = run_stage5(&table);
    let stage6 = run_stage6(&table)?;

    Ok(Analysis {
        sources: samples.sources.clone(),
        strict,
        table,
        stage3,
        stage4,
        stage5,
        stage6,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
