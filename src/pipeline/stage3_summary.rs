use serde::Serialize;

use crate::model::factors::{Method, Metric};
use crate::model::scores::ScoreTable;
use crate::stats::describe::{Summary, describe_scores};

#[derive(Debug, Clone, Serialize)]
pub struct CellSummary {
    pub metric: Metric,
    pub method: Method,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodStat {
    pub method: Method,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricStat {
    pub metric: Metric,
    pub summary: Summary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricGroup {
    pub metric: Metric,
    pub methods: Vec<MethodStat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodGroup {
    pub method: Method,
    pub metrics: Vec<MetricStat>,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    /// Metric-major: one entry per (metric, method) in canonical order.
    pub cells: Vec<CellSummary>,
}

impl Stage3Output {
    pub fn get(&self, metric: Metric, method: Method) -> Option<&Summary> {
        self.cells
            .iter()
            .find(|c| c.metric == metric && c.method == method)
            .map(|c| &c.summary)
    }

    pub fn by_metric(&self) -> Vec<MetricGroup> {
        Metric::ALL
            .iter()
            .map(|&metric| MetricGroup {
                metric,
                methods: Method::ALL
                    .iter()
                    .filter_map(|&method| {
                        self.get(metric, method).map(|s| MethodStat {
                            method,
                            summary: *s,
                        })
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn by_method(&self) -> Vec<MethodGroup> {
        Method::ALL
            .iter()
            .map(|&method| MethodGroup {
                method,
                metrics: Metric::ALL
                    .iter()
                    .filter_map(|&metric| {
                        self.get(metric, method).map(|s| MetricStat {
                            metric,
                            summary: *s,
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}

pub fn run_stage3(table: &ScoreTable) -> Stage3Output {
    let mut cells = Vec::with_capacity(Metric::COUNT * Method::COUNT);
    for metric in Metric::ALL {
        for method in Method::ALL {
            cells.push(CellSummary {
                metric,
                method,
                summary: describe_scores(table.get(metric, method)),
            });
        }
    }
    Stage3Output { cells }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summary.rs"]
mod tests;
