//! Report formatter abstraction

use seedpatch_application::{ApplyPatchOutput, InspectCatalogOutput};

/// Formats run results for an output channel
pub trait ReportFormatter {
    /// Full report with per-slug detail
    fn format(&self, output: &ApplyPatchOutput) -> String;

    /// One-line result plus warnings
    fn format_summary(&self, output: &ApplyPatchOutput) -> String;

    /// Machine-readable JSON report
    fn format_json(&self, output: &ApplyPatchOutput) -> String;

    /// Report for an inspection run
    fn format_check(&self, output: &InspectCatalogOutput) -> String;

    /// Machine-readable JSON report for an inspection run
    fn format_check_json(&self, output: &InspectCatalogOutput) -> String;
}
