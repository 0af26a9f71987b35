//! Progress reporting for patch runs
//!
//! A run is a single sub-second pass, so progress is plain console
//! lines, one per step and one per patched slug.

use colored::Colorize;
use seedpatch_application::ApplyPatchProgressNotifier;
use std::path::Path;

/// Prints a line per pipeline step and per patched record
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleProgress;

impl ConsoleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ApplyPatchProgressNotifier for ConsoleProgress {
    fn on_load_start(&self, seed_path: &Path) {
        println!("{} Loading {}", "->".cyan(), seed_path.display());
    }

    fn on_loaded(&self, total_records: usize, patch_count: usize) {
        println!(
            "{} {} records, {} patch entries",
            "->".cyan(),
            total_records,
            patch_count
        );
    }

    fn on_record_patched(&self, slug: &str, field_count: usize) {
        println!("  {} {} ({} fields)", "v".green(), slug, field_count);
    }

    fn on_saved(&self, seed_path: &Path) {
        println!("{} Wrote {}", "->".cyan(), seed_path.display());
    }
}
