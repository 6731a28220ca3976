use super::*;
use crate::input::RawSamples;
use crate::pipeline::stage1_parse::run_stage1;
use crate::pipeline::stage2_reshape::{reshape, run_stage2};

fn embedded_table() -> ScoreTable {
    let stage1 = run_stage1(&RawSamples::embedded(), true).unwrap();
    run_stage2(&stage1)
}

#[test]
fn test_cells_cover_every_metric_and_method() {
    let out = run_stage3(&embedded_table());
    assert_eq!(out.cells.len(), Metric::COUNT * Method::COUNT);
    assert_eq!(out.cells[0].metric, Metric::Appropriateness);
    assert_eq!(out.cells[0].method, Method::Overhand);
    assert_eq!(out.cells[11].metric, Metric::Safety);
    assert_eq!(out.cells[11].method, Method::Side);
}

#[test]
fn test_embedded_reference_values() {
    let out = run_stage3(&embedded_table());
    let s = out.get(Metric::Appropriateness, Method::Overhand).unwrap();
    assert_eq!(s.n, 36);
    assert!((s.mean - 4.25).abs() < 1e-12);
    assert!((s.std - 0.7949493345141213).abs() < 1e-12);

    let s = out.get(Metric::Naturalness, Method::Side).unwrap();
    assert_eq!(s.n, 28);
    assert!((s.mean - 3.7857142857142856).abs() < 1e-12);
    assert!((s.std - 0.9006800152084636).abs() < 1e-12);

    let s = out.get(Metric::Safety, Method::Underhand).unwrap();
    assert_eq!(s.n, 44);
    assert!((s.mean - 4.659090909090909).abs() < 1e-12);
}

#[test]
fn test_grouped_views_agree() {
    let out = run_stage3(&embedded_table());
    let by_metric = out.by_metric();
    let by_method = out.by_method();
    assert_eq!(by_metric.len(), Metric::COUNT);
    assert_eq!(by_method.len(), Method::COUNT);
    for group in &by_metric {
        assert_eq!(group.methods.len(), Method::COUNT);
        for stat in &group.methods {
            let other = by_method
                .iter()
                .find(|g| g.method == stat.method)
                .and_then(|g| g.metrics.iter().find(|m| m.metric == group.metric))
                .unwrap();
            assert_eq!(stat.summary, other.summary);
        }
    }
}

#[test]
fn test_single_row_summary() {
    let table = reshape(&[vec![[4, 3, 4, 5]], vec![[4, 3, 4, 5]], vec![[4, 3, 4, 5]]]);
    let out = run_stage3(&table);
    let s = out.get(Metric::Safety, Method::Side).unwrap();
    assert_eq!(s.mean, 5.0);
    assert_eq!(s.std, 0.0);
}
