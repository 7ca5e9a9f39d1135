//! Results persistence module

use crate::analysis::AnalysisReport;
use crate::error::Result;
use itertools::Itertools;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const SUMMARY_FILE: &str = "summary.json";
pub const TABLE_FILE: &str = "analysis_results.csv";

/// Save the analysis summary and table to the specified directory
pub fn save_results(report: &AnalysisReport, output_dir: impl AsRef<Path>) -> Result<()> {
    let output_dir = output_dir.as_ref();
    log::info!("Saving analysis results to {}", output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(report, output_dir)?;
    save_table(report, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    log::debug!("Saving summary information");

    let path = output_dir.join(SUMMARY_FILE);
    let mut file = File::create(path)?;

    // Largest changes first, for readability
    let overall_delta: Vec<_> = report
        .overall_delta
        .iter()
        .sorted_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)))
        .map(|(node, delta)| json!({ "node": node, "delta": delta }))
        .collect();

    let summary = json!({
        "label": report.label,
        "removed_nodes": report.removed_nodes,
        "metrics": report.metrics,
        "diameter": report.diameter,
        "graph_info": report.graph_info,
        "overall_delta": overall_delta,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save the per-node table as CSV
fn save_table(report: &AnalysisReport, output_dir: &Path) -> Result<()> {
    log::debug!("Saving analysis table with {} rows", report.table.rows.len());

    let path = output_dir.join(TABLE_FILE);
    let mut file = File::create(path)?;
    file.write_all(table_to_csv(report).as_bytes())?;

    Ok(())
}

/// Quote a CSV field when it contains a quote, comma or newline
pub fn csv_escape(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Six decimals, `N/A` for missing values
pub fn format_cell(value: f64) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Render the report table as CSV with a leading `Node` column
pub fn table_to_csv(report: &AnalysisReport) -> String {
    let table = &report.table;
    let mut out = String::new();

    let header = std::iter::once("Node")
        .chain(table.columns.iter().map(String::as_str))
        .map(csv_escape)
        .join(",");
    out.push_str(&header);
    out.push('\n');

    for row in &table.rows {
        let line = std::iter::once(csv_escape(&row.node))
            .chain(row.values.iter().map(|v| csv_escape(&format_cell(*v))))
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }

    out
}
