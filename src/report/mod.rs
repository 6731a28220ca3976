pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::factors::Method;
use crate::pipeline::stage3_summary::{MethodGroup, MetricGroup};
use crate::pipeline::stage4_ttest::PairwiseTest;
use crate::pipeline::stage5_pooled::PooledMetric;
use crate::stats::anova::AnovaTable;

#[derive(Debug, Clone, Serialize)]
pub struct InputInfo {
    pub method: Method,
    pub source: String,
    pub participants: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub strict: bool,
    pub inputs: Vec<InputInfo>,
    pub n_observations: usize,
    pub by_metric: Vec<MetricGroup>,
    pub by_method: Vec<MethodGroup>,
    pub t_tests: Vec<PairwiseTest>,
    pub overall: Vec<PooledMetric>,
    pub anova: AnovaTable,
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

pub fn format_opt_f64_6(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.6}", v),
        None => "NaN".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
