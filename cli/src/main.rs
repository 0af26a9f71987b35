//! CLI entrypoint for seed-patch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use seedpatch_application::{
    ApplyPatchInput, ApplyPatchUseCase, InspectCatalogInput, InspectCatalogUseCase,
};
use seedpatch_infrastructure::{
    ConfigLoader, FileOutputFormat, JsonFileCatalogStore, JsonFilePatchSource, JsonlChangeLogger,
};
use seedpatch_presentation::{Cli, ConsoleFormatter, ConsoleProgress, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let seed_path = cli
        .seed
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.seed.path));
    let format = cli.output.unwrap_or(match config.output.format {
        FileOutputFormat::Full => OutputFormat::Full,
        FileOutputFormat::Summary => OutputFormat::Summary,
        FileOutputFormat::Json => OutputFormat::Json,
    });

    // === Dependency Injection ===
    let store = Arc::new(JsonFileCatalogStore::new());

    // Check mode: inspect and exit
    if cli.check {
        let use_case = InspectCatalogUseCase::new(store);
        let output = use_case.execute(InspectCatalogInput::new(seed_path))?;

        let report = match format {
            OutputFormat::Json => ConsoleFormatter::format_check_json(&output),
            _ => ConsoleFormatter::format_check(&output),
        };
        println!("{}", report);
        return Ok(());
    }

    // Patch mode: the patch file is required
    let patch_file = match cli.patch_file.clone() {
        Some(path) => path,
        None => bail!("Patch file is required. Use --check to inspect the seed without patching."),
    };

    info!("Patching {} from {}", seed_path.display(), patch_file.display());

    let patches = Arc::new(JsonFilePatchSource::new(patch_file));
    let mut use_case = ApplyPatchUseCase::new(store, patches);

    // Attach the JSONL audit log when requested
    let audit_path = cli
        .audit_log
        .clone()
        .or_else(|| config.audit.log_path.as_ref().map(PathBuf::from));
    if let Some(path) = audit_path {
        match JsonlChangeLogger::new(&path) {
            Some(logger) => use_case = use_case.with_change_logger(Arc::new(logger)),
            None => warn!("audit log disabled: could not open {}", path.display()),
        }
    }

    let input = ApplyPatchInput::new(seed_path).with_dry_run(cli.dry_run);

    // Execute with or without progress reporting
    let output = if cli.quiet {
        use_case.execute(input)?
    } else {
        use_case.execute_with_progress(input, &ConsoleProgress::new())?
    };

    // Output results. Missing slugs are already part of the report and
    // do not affect the exit status.
    let report = match format {
        OutputFormat::Full => ConsoleFormatter::format(&output),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&output),
        OutputFormat::Json => ConsoleFormatter::format_json(&output),
    };

    println!("{}", report);

    Ok(())
}
