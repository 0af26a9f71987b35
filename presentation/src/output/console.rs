//! Console output formatter for patch run reports

use crate::output::formatter::ReportFormatter;
use colored::Colorize;
use seedpatch_application::{ApplyPatchOutput, InspectCatalogOutput};

/// Formats patch run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run report
    pub fn format(result: &ApplyPatchOutput) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Seed Patch Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Seed:".cyan().bold(),
            result.seed_path.display()
        ));
        output.push_str(&format!(
            "{} {} records, {} patch entries\n",
            "Loaded:".cyan().bold(),
            result.total_records,
            result.patch_count
        ));
        if result.dry_run {
            output.push_str(&format!(
                "{} dry run, seed file not written\n",
                "Mode:".cyan().bold()
            ));
        }

        output.push_str(&Self::section_header("Applied"));
        if result.applied.is_empty() {
            output.push_str("\n(none)\n");
        } else {
            for slug in &result.applied {
                output.push_str(&format!("  {} {}\n", "v".green(), slug));
            }
            output.push_str(&format!(
                "\n{} record(s) updated across {} slug(s)\n",
                result.records_updated,
                result.applied.len()
            ));
        }

        if !result.missing.is_empty() {
            output.push_str(&Self::section_header("Missing"));
            for slug in &result.missing {
                output.push_str(&format!("  {} {}\n", "x".red(), slug));
            }
            output.push_str(&format!(
                "\n{}\n",
                "These slugs matched no record in the seed.".yellow()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the one-line summary (plus warnings when needed)
    pub fn format_summary(result: &ApplyPatchOutput) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Updated {}/{} tools: {}\n",
            result.applied.len(),
            result.patch_count,
            if result.applied.is_empty() {
                "(none)".to_string()
            } else {
                result.applied.join(", ")
            }
        ));

        if result.dry_run {
            output.push_str("Dry run: seed file not written.\n");
        }

        if !result.missing.is_empty() {
            output.push_str(&format!(
                "{} not found in seed: {}\n",
                "WARNING:".yellow().bold(),
                result.missing.join(", ")
            ));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ApplyPatchOutput) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an inspection report
    pub fn format_check(result: &InspectCatalogOutput) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Seed Catalog Check"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Seed:".cyan().bold(),
            result.seed_path.display()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Records:".cyan().bold(),
            result.summary.total_records
        ));

        if result.summary.duplicate_slugs.is_empty() && result.summary.unslugged_records == 0 {
            output.push_str(&format!("\n{}\n", "No structural issues found.".green()));
        } else {
            if !result.summary.duplicate_slugs.is_empty() {
                output.push_str(&Self::section_header("Duplicate slugs"));
                for (slug, count) in &result.summary.duplicate_slugs {
                    output.push_str(&format!("  {} {} ({} records)\n", "x".red(), slug, count));
                }
                output.push_str(&format!(
                    "\n{}\n",
                    "A patch for these slugs updates every matching record.".yellow()
                ));
            }
            if result.summary.unslugged_records > 0 {
                output.push_str(&format!(
                    "\n{} {} record(s) have no slug and can never be patched\n",
                    "WARNING:".yellow().bold(),
                    result.summary.unslugged_records
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an inspection report as JSON
    pub fn format_check_json(result: &InspectCatalogOutput) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl ReportFormatter for ConsoleFormatter {
    fn format(&self, output: &ApplyPatchOutput) -> String {
        Self::format(output)
    }

    fn format_summary(&self, output: &ApplyPatchOutput) -> String {
        Self::format_summary(output)
    }

    fn format_json(&self, output: &ApplyPatchOutput) -> String {
        Self::format_json(output)
    }

    fn format_check(&self, output: &InspectCatalogOutput) -> String {
        Self::format_check(output)
    }

    fn format_check_json(&self, output: &InspectCatalogOutput) -> String {
        Self::format_check_json(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedpatch_domain::CatalogSummary;
    use std::path::PathBuf;

    fn run_output(applied: &[&str], missing: &[&str]) -> ApplyPatchOutput {
        ApplyPatchOutput {
            seed_path: PathBuf::from("data/seed.json"),
            applied: applied.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            records_updated: applied.len(),
            total_records: 10,
            patch_count: applied.len() + missing.len(),
            dry_run: false,
        }
    }

    #[test]
    fn test_summary_counts_and_lists_applied() {
        let text = ConsoleFormatter::format_summary(&run_output(&["langchain", "flowise"], &[]));
        assert!(text.contains("Updated 2/2 tools: langchain, flowise"));
        assert!(!text.contains("not found in seed"));
    }

    #[test]
    fn test_summary_warns_only_when_missing() {
        let text = ConsoleFormatter::format_summary(&run_output(&["langchain"], &["ghost"]));
        assert!(text.contains("Updated 1/2 tools"));
        assert!(text.contains("not found in seed: ghost"));
    }

    #[test]
    fn test_summary_mentions_dry_run() {
        let mut output = run_output(&["langchain"], &[]);
        output.dry_run = true;
        let text = ConsoleFormatter::format_summary(&output);
        assert!(text.contains("Dry run"));
    }

    #[test]
    fn test_full_report_lists_each_slug() {
        let text = ConsoleFormatter::format(&run_output(&["langchain"], &["ghost"]));
        assert!(text.contains("langchain"));
        assert!(text.contains("ghost"));
        assert!(text.contains("matched no record"));
    }

    #[test]
    fn test_json_report_parses_back() {
        let text = ConsoleFormatter::format_json(&run_output(&["langchain"], &["ghost"]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["applied"], serde_json::json!(["langchain"]));
        assert_eq!(value["missing"], serde_json::json!(["ghost"]));
    }

    #[test]
    fn test_check_report_flags_duplicates() {
        let output = InspectCatalogOutput {
            seed_path: PathBuf::from("data/seed.json"),
            summary: CatalogSummary {
                total_records: 5,
                duplicate_slugs: vec![("dup".to_string(), 2)],
                unslugged_records: 1,
            },
        };

        let text = ConsoleFormatter::format_check(&output);
        assert!(text.contains("dup (2 records)"));
        assert!(text.contains("have no slug"));

        let clean = InspectCatalogOutput {
            seed_path: PathBuf::from("data/seed.json"),
            summary: CatalogSummary::default(),
        };
        assert!(ConsoleFormatter::format_check(&clean).contains("No structural issues"));
    }
}
