//! Run report export
//!
//! Serializes the run report to JSON for external consumption.

use crate::runner::RunReport;
use serde::Serialize;

/// JSON envelope around a run report
#[derive(Debug, Clone, Serialize)]
pub struct RunExport<'a> {
    pub version: &'static str,
    pub report: &'a RunReport,
}

/// Build the export envelope for a report
pub fn build_export(report: &RunReport) -> RunExport<'_> {
    RunExport {
        version: crate::VERSION,
        report,
    }
}

/// Render a run report as pretty-printed JSON
pub fn export_json(report: &RunReport) -> String {
    serde_json::to_string_pretty(&build_export(report)).unwrap_or_default()
}

/// Write the JSON report to a file path
pub fn write_to_file(report: &RunReport, path: &str) -> std::io::Result<()> {
    std::fs::write(path, export_json(report))
}
