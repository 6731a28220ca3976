use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::factors::Method;
use crate::pipeline::{Analysis, AnalysisError};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{InputInfo, SummaryData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn build_summary(analysis: &Analysis) -> SummaryData {
    let inputs = Method::ALL
        .iter()
        .map(|&method| InputInfo {
            method,
            source: analysis.sources[method.index()].clone(),
            participants: analysis.table.n_participants(method),
        })
        .collect();

    SummaryData {
        tool: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        strict: analysis.strict,
        inputs,
        n_observations: analysis.stage6.records.len(),
        by_metric: analysis.stage3.by_metric(),
        by_method: analysis.stage3.by_method(),
        t_tests: analysis.stage4.tests.clone(),
        overall: analysis.stage5.overall.clone(),
        anova: analysis.stage6.anova.clone(),
    }
}

pub fn render(summary: &SummaryData, format: OutputFormat) -> Result<String, AnalysisError> {
    match format {
        OutputFormat::Text => Ok(render_report_text(summary)),
        OutputFormat::Json => Ok(render_summary_json(summary)?),
    }
}

pub fn write_reports(summary: &SummaryData, out_dir: &Path) -> Result<(), AnalysisError> {
    fs::create_dir_all(out_dir)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(summary))?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(summary)?)?;

    tracing::info!(
        report = %report_path.display(),
        summary = %summary_path.display(),
        "wrote reports"
    );
    Ok(())
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
