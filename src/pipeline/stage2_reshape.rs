use crate::model::factors::{Method, Metric};
use crate::model::scores::{ResponseRow, ScoreTable};
use crate::pipeline::stage1_parse::Stage1Output;

pub fn reshape(rows: &[Vec<ResponseRow>; Method::COUNT]) -> ScoreTable {
    let mut table = ScoreTable::default();
    for metric in Metric::ALL {
        for method in Method::ALL {
            for row in &rows[method.index()] {
                table.push(metric, method, row[metric.index()]);
            }
        }
    }
    table
}

pub fn run_stage2(stage1: &Stage1Output) -> ScoreTable {
    let table = reshape(&stage1.rows);
    let counts = Method::ALL.map(|m| table.n_participants(m));
    if counts.iter().any(|&c| c != counts[0]) {
        tracing::warn!(
            overhand = counts[0],
            underhand = counts[1],
            side = counts[2],
            "participant counts differ between methods; comparisons use unequal group sizes"
        );
    }
    table
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_reshape.rs"]
mod tests;
