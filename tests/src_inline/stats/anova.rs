use super::*;

fn balanced_two_by_two() -> (Vec<f64>, Vec<Factor>, Vec<Term>) {
    let y = vec![1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 7.0];
    let a = Factor::from_labels("A", &["a1", "a1", "a1", "a1", "a2", "a2", "a2", "a2"]);
    let b = Factor::from_labels("B", &["b1", "b1", "b2", "b2", "b1", "b1", "b2", "b2"]);
    let terms = vec![Term::main(0), Term::main(1), Term::interaction(0, 1)];
    (y, vec![a, b], terms)
}

#[test]
fn test_balanced_design_matches_classical_sums_of_squares() {
    let (y, factors, terms) = balanced_two_by_two();
    let table = anova_type2(&y, &factors, &terms).unwrap();
    let labels = table.rows.iter().map(|r| r.term.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["A", "B", "A:B", "Residual"]);

    let expected = [(10.125, 1.0), (15.125, 1.0), (1.125, 1.0), (3.5, 4.0)];
    for (row, (ss, df)) in table.rows.iter().zip(expected) {
        assert!((row.sum_sq - ss).abs() < 1e-9, "{}: {}", row.term, row.sum_sq);
        assert_eq!(row.df, df);
    }

    let f_a = table.rows[0].f_value.unwrap();
    assert!((f_a - 10.125 / 0.875).abs() < 1e-9);
    let f_ab = table.rows[2].f_value.unwrap();
    assert!((f_ab - 1.125 / 0.875).abs() < 1e-9);
    assert!(table.rows[3].f_value.is_none());
    assert!(table.rows[3].p_value.is_none());

    for row in &table.rows[..3] {
        let p = row.p_value.unwrap();
        assert!((0.0..=1.0).contains(&p));
    }
    // Larger F on the same df gives a smaller p.
    assert!(table.rows[1].p_value.unwrap() < table.rows[0].p_value.unwrap());
    assert!((table.r_squared - 26.375 / 29.875).abs() < 1e-9);
    assert!((table.residual_std_error - 0.875f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_single_level_factor_has_no_test() {
    let y = vec![1.0, 2.0, 4.0, 3.0, 5.0, 7.0];
    let a = Factor::from_labels("A", &["only"; 6]);
    let b = Factor::from_labels("B", &["p", "q", "r", "p", "q", "r"]);
    let terms = vec![Term::main(0), Term::main(1), Term::interaction(0, 1)];
    let table = anova_type2(&y, &[a, b], &terms).unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[0].df, 0.0);
    assert!(table.rows[0].f_value.is_none());
    assert_eq!(table.rows[1].df, 2.0);
    assert!(table.rows[1].f_value.is_some());
    assert_eq!(table.rows[2].df, 0.0);
}

#[test]
fn test_saturated_model_is_error() {
    let y = vec![1.0, 2.0, 3.0, 5.0];
    let a = Factor::from_labels("A", &["x", "x", "y", "y"]);
    let b = Factor::from_labels("B", &["p", "q", "p", "q"]);
    let terms = vec![Term::main(0), Term::main(1), Term::interaction(0, 1)];
    let err = anova_type2(&y, &[a, b], &terms).unwrap_err();
    assert!(matches!(err, StatsError::InsufficientObservations(_)));
}

#[test]
fn test_exact_fit_is_error() {
    let y = vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 5.0, 5.0];
    let a = Factor::from_labels("A", &["x", "x", "x", "x", "y", "y", "y", "y"]);
    let b = Factor::from_labels("B", &["p", "p", "q", "q", "p", "p", "q", "q"]);
    let terms = vec![Term::main(0), Term::main(1), Term::interaction(0, 1)];
    let err = anova_type2(&y, &[a, b], &terms).unwrap_err();
    assert!(matches!(err, StatsError::ZeroVariance(_)));
}
