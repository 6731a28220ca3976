use super::*;

#[test]
fn test_columns_follow_metric_order() {
    let rows = [
        vec![[4, 3, 4, 5], [5, 2, 3, 1]],
        vec![[1, 1, 1, 1]],
        vec![[2, 3, 4, 5], [5, 4, 3, 2], [3, 3, 3, 3]],
    ];
    let table = reshape(&rows);
    assert_eq!(table.get(Metric::Appropriateness, Method::Overhand), &[4, 5]);
    assert_eq!(table.get(Metric::Safety, Method::Overhand), &[5, 1]);
    assert_eq!(table.get(Metric::Naturalness, Method::Underhand), &[1]);
    assert_eq!(table.get(Metric::Predictability, Method::Side), &[4, 3, 3]);
    assert_eq!(table.n_participants(Method::Side), 3);
    assert_eq!(table.n_observations(), 6 * 4);
}

#[test]
fn test_pooled_concatenates_in_method_order() {
    let rows = [vec![[1, 0, 0, 0]], vec![[2, 0, 0, 0]], vec![[3, 0, 0, 0]]];
    let table = reshape(&rows);
    assert_eq!(table.pooled(Metric::Appropriateness), vec![1, 2, 3]);
}

#[test]
fn test_unequal_counts_are_tolerated() {
    let stage1 = Stage1Output {
        rows: [vec![[4, 4, 4, 4]], vec![], vec![[5, 5, 5, 5], [3, 3, 3, 3]]],
    };
    let table = run_stage2(&stage1);
    assert_eq!(table.n_participants(Method::Overhand), 1);
    assert_eq!(table.n_participants(Method::Underhand), 0);
    assert_eq!(table.n_participants(Method::Side), 2);
}
