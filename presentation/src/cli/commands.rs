//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for patch run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with per-slug detail
    Full,
    /// One-line result plus warnings
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for seed-patch
#[derive(Parser, Debug)]
#[command(name = "seed-patch")]
#[command(version, about = "Apply slug-keyed field updates to a tool catalog seed file")]
#[command(long_about = r#"
seed-patch merges a batch of field overrides into the tools of a JSON seed
catalog. The patch file is a JSON object keyed by slug; each entry lists the
fields to overwrite on every record carrying that slug. Fields not named in
an entry are left untouched, and slugs that match no record are reported as
warnings without failing the run.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./seedpatch.toml    Project-level config
3. ~/.config/seed-patch/config.toml   Global config

Example:
  seed-patch updates/batch-2026-02.json
  seed-patch --seed data/seed.json --dry-run updates/batch-2026-02.json
  seed-patch --check --seed data/seed.json
"#)]
pub struct Cli {
    /// JSON file of slug-keyed field overrides (not required with --check)
    pub patch_file: Option<PathBuf>,

    /// Path of the seed catalog to patch (defaults to the configured path)
    #[arg(short, long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Merge and report, but leave the seed file untouched
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Inspect the seed catalog (duplicate slugs, slugless records) and exit
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Append a JSONL audit record for every applied change
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
