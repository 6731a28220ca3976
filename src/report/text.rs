use crate::model::factors::Metric;
use crate::report::{SummaryData, format_f64_2, format_f64_4, format_opt_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("\n----- Results grouped by metric: -----\n");
    for group in &data.by_metric {
        out.push_str(&format!("\n{}:\n", group.metric));
        for stat in &group.methods {
            out.push_str(&format!(
                "  {}: {} samples, Mean: {}, Std: {}\n",
                stat.method,
                stat.summary.n,
                format_f64_2(stat.summary.mean),
                format_f64_2(stat.summary.std)
            ));
        }
    }

    out.push_str("\n----- Results grouped by handover method: -----\n");
    for group in &data.by_method {
        out.push_str(&format!("\n{}:\n", group.method));
        for stat in &group.metrics {
            out.push_str(&format!(
                "  {}: Mean: {}, Std: {}\n",
                stat.metric,
                format_f64_2(stat.summary.mean),
                format_f64_2(stat.summary.std)
            ));
        }
    }

    out.push_str("\n----- T-Test Results: -----\n");
    for metric in Metric::ALL {
        out.push_str(&format!("\n{}:\n", metric));
        for t in data.t_tests.iter().filter(|t| t.metric == metric) {
            out.push_str(&format!(
                "  {} vs {}: t-statistic = {}, p-value = {}\n",
                t.first,
                t.second,
                format_f64_4(t.test.t),
                format_f64_4(t.test.p_value)
            ));
        }
    }

    out.push_str("\n----- Overall Metrics: -----\n");
    for pooled in &data.overall {
        out.push_str(&format!("\n{}:\n", pooled.metric));
        out.push_str(&format!("  Mean: {}\n", format_f64_2(pooled.summary.mean)));
        out.push_str(&format!("  Std: {}\n", format_f64_2(pooled.summary.std)));
    }

    out.push_str("\n----- Two-Way ANOVA Results (type II sums of squares): -----\n");
    out.push_str(&render_anova_table(data));
    out.push('\n');

    out
}

fn render_anova_table(data: &SummaryData) -> String {
    let label_width = data
        .anova
        .rows
        .iter()
        .map(|r| r.term.len())
        .max()
        .unwrap_or(0)
        .max(8);
    let mut out = format!(
        "{:<w$}  {:>12}  {:>6}  {:>12}  {:>12}\n",
        "",
        "sum_sq",
        "df",
        "F",
        "PR(>F)",
        w = label_width
    );
    for row in &data.anova.rows {
        out.push_str(&format!(
            "{:<w$}  {:>12.6}  {:>6.1}  {:>12}  {:>12}\n",
            row.term,
            row.sum_sq,
            row.df,
            format_opt_f64_6(row.f_value),
            format_opt_f64_6(row.p_value),
            w = label_width
        ));
    }
    out.push_str(&format!(
        "R-squared: {:.6}, residual std error: {:.6}\n",
        data.anova.r_squared, data.anova.residual_std_error
    ));
    out
}
