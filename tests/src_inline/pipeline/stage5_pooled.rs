use super::*;
use crate::pipeline::stage2_reshape::reshape;

#[test]
fn test_identical_groups_pool_to_common_values() {
    let table = reshape(&[vec![[4, 3, 4, 5]], vec![[4, 3, 4, 5]], vec![[4, 3, 4, 5]]]);
    let out = run_stage5(&table);
    assert_eq!(out.overall.len(), Metric::COUNT);
    let app = &out.overall[0];
    assert_eq!(app.metric, Metric::Appropriateness);
    assert_eq!(app.summary.n, 3);
    assert_eq!(app.summary.mean, 4.0);
    assert_eq!(app.summary.std, 0.0);
}

#[test]
fn test_cross_group_spread_shows_in_std() {
    let table = reshape(&[
        vec![[2, 0, 0, 0], [2, 0, 0, 0]],
        vec![[4, 0, 0, 0], [4, 0, 0, 0]],
        vec![[6, 0, 0, 0], [6, 0, 0, 0]],
    ]);
    let out = run_stage5(&table);
    let s = out.overall[0].summary;
    assert_eq!(s.mean, 4.0);
    assert!((s.std - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_embedded_overall_reference_values() {
    let samples = crate::input::RawSamples::embedded();
    let stage1 = crate::pipeline::stage1_parse::run_stage1(&samples, true).unwrap();
    let out = run_stage5(&reshape(&stage1.rows));
    let expected = [
        (4.351851851851852, 0.6846845017531905),
        (3.4444444444444446, 1.003081671403766),
        (4.287037037037037, 0.7077733201402351),
        (4.62037037037037, 0.7033990568632849),
    ];
    for (pooled, (mean, std)) in out.overall.iter().zip(expected) {
        assert_eq!(pooled.summary.n, 108);
        assert!((pooled.summary.mean - mean).abs() < 1e-12);
        assert!((pooled.summary.std - std).abs() < 1e-12);
    }
}
