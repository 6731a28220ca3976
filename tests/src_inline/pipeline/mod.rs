use super::*;

#[test]
fn test_identical_samples_end_to_end_t_tests() {
    let samples = RawSamples::from_texts("4 3 4 5", "4 3 4 5", "4 3 4 5");
    let stage1 = run_stage1(&samples, true).unwrap();
    let table = run_stage2(&stage1);
    let stage4 = run_stage4(&table).unwrap();
    assert_eq!(stage4.tests.len(), 12);
    for t in &stage4.tests {
        assert_eq!(t.test.t, 0.0);
        assert_eq!(t.test.p_value, 1.0);
    }
    // The interaction model is saturated with one participant per method.
    let err = run_analysis(&samples, false).unwrap_err();
    assert!(matches!(err, AnalysisError::Anova { .. }));
}

#[test]
fn test_embedded_analysis_runs() {
    let analysis = run_analysis(&RawSamples::embedded(), true).unwrap();
    assert!(analysis.strict);
    assert_eq!(analysis.table.n_observations(), 432);
    assert_eq!(analysis.stage3.cells.len(), 12);
    assert_eq!(analysis.stage4.tests.len(), 12);
    assert_eq!(analysis.stage5.overall.len(), 4);
    assert_eq!(analysis.stage6.anova.rows.len(), 4);
    assert_eq!(analysis.sources, ["embedded", "embedded", "embedded"]);
}

#[test]
fn test_strict_rejection_propagates() {
    let samples = RawSamples::from_texts("4 3 4 5 x", "4 3 4 5", "4 3 4 5");
    let err = run_analysis(&samples, true).unwrap_err();
    assert!(matches!(err, AnalysisError::Input(InputError::Rejected(_))));
}

#[test]
fn test_unequal_group_sizes_are_analysed() {
    let samples = RawSamples::from_texts(
        "4 3 4 5 5 3 4 5 4 2 5 4",
        "4 3 4 5 5 4 5 5",
        "5 4 3 5 4 5 4 4 5 5 5 5 4 4 5 5",
    );
    let analysis = run_analysis(&samples, true).unwrap();
    assert_eq!(analysis.table.n_participants(Method::Overhand), 3);
    assert_eq!(analysis.table.n_participants(Method::Underhand), 2);
    assert_eq!(analysis.table.n_participants(Method::Side), 4);
    let residual = analysis.stage6.anova.rows.last().unwrap();
    assert_eq!(residual.df, (9 * 4 - 12) as f64);
}
