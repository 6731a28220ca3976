use crate::model::factors::{Method, Metric};
use crate::model::scores::{LongRecord, ScoreTable};
use crate::pipeline::AnalysisError;
use crate::stats::anova::{AnovaTable, anova_type2};
use crate::stats::ols::{Factor, Term};

#[derive(Debug, Clone)]
pub struct Stage6Output {
    pub records: Vec<LongRecord>,
    pub anova: AnovaTable,
}

/// Flattens the score table metric-major, then method, then participant.
/// Participants are numbered from 1 within each method.
pub fn long_format(table: &ScoreTable) -> Vec<LongRecord> {
    let mut records = Vec::with_capacity(table.n_observations());
    for metric in Metric::ALL {
        for method in Method::ALL {
            for (i, &score) in table.get(metric, method).iter().enumerate() {
                records.push(LongRecord {
                    participant: i + 1,
                    method,
                    metric,
                    score,
                });
            }
        }
    }
    records
}

/// Score ~ Method + Metric + Method:Metric, type-II sums of squares.
pub fn fit_two_way(records: &[LongRecord]) -> Result<AnovaTable, AnalysisError> {
    let y = records.iter().map(|r| r.score as f64).collect::<Vec<_>>();
    let methods = records.iter().map(|r| r.method.name()).collect::<Vec<_>>();
    let metrics = records.iter().map(|r| r.metric.name()).collect::<Vec<_>>();
    let factors = [
        Factor::from_labels("Method", &methods),
        Factor::from_labels("Metric", &metrics),
    ];
    let terms = [Term::main(0), Term::main(1), Term::interaction(0, 1)];
    anova_type2(&y, &factors, &terms).map_err(|source| AnalysisError::Anova { source })
}

pub fn run_stage6(table: &ScoreTable) -> Result<Stage6Output, AnalysisError> {
    let records = long_format(table);
    let anova = fit_two_way(&records)?;
    for row in &anova.rows {
        tracing::debug!(
            term = %row.term,
            sum_sq = row.sum_sq,
            df = row.df,
            f = ?row.f_value,
            p = ?row.p_value,
            "anova term"
        );
    }
    Ok(Stage6Output { records, anova })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_anova.rs"]
mod tests;
