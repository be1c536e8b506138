//! stubforge CLI Entry Point
//!
//! With no arguments, pads every category's test file with the reference
//! number of generated stubs. Flags narrow or preview the run.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use stubforge_generate::{
    appender::delimited, Category, CategoryRegistry, FsSink, GenerationEngine, GenerationReport,
    GeneratorConfig, NumberingMode, RunEvent, RunOptions,
};
use stubforge_utils::logging::LogLevel;

#[derive(Parser, Debug)]
#[command(name = "stubforge")]
#[command(about = "Append generated placeholder tests to per-category test files")]
#[command(version)]
struct Cli {
    /// Directory holding the per-category test files
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Configuration overlay file (TOML, JSON or YAML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Only process these categories (repeatable)
    #[arg(long = "only", value_name = "CATEGORY")]
    only: Vec<Category>,

    /// Override a category's test count, e.g. `--count ufunc=10` (repeatable)
    #[arg(long = "count", value_name = "CATEGORY=N", value_parser = parse_count)]
    counts: Vec<(Category, usize)>,

    /// Print the blocks that would be appended without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Number new tests after the highest number already in each file
    #[arg(long)]
    continue_numbering: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the category registry and exit
    #[arg(long)]
    list: bool,

    /// Log level (debug, info, warning, error, critical)
    #[arg(long, default_value = "warning")]
    log_level: LogLevel,
}

/// Parse `CATEGORY=N`
fn parse_count(value: &str) -> std::result::Result<(Category, usize), String> {
    let (name, count) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=N, got {:?}", value))?;
    let category = name.trim().parse::<Category>()?;
    let count = count
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid count {:?}: {}", count, e))?;
    Ok((category, count))
}

/// Reference configuration, then the overlay file, then command-line flags
fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(base_dir) = &cli.base_dir {
        config.base_dir = base_dir.clone();
    }
    if cli.continue_numbering {
        config.numbering = NumberingMode::ContinueFromFile;
    }
    for &(category, count) in &cli.counts {
        config.set_count(category, count)?;
    }

    Ok(config)
}

fn print_registry(registry: &CategoryRegistry) {
    println!(
        "{:<12} {:<20} {:>6} {:>7}  TARGET",
        "CATEGORY", "NAME", "COUNT", "OFFSET"
    );
    for entry in registry.entries() {
        println!(
            "{:<12} {:<20} {:>6} {:>7}  {}",
            entry.category.as_str(),
            entry.category.display_name(),
            entry.required_count,
            entry.starting_offset,
            registry.target_path(entry.category).display()
        );
    }
    println!("{:<12} {:<20} {:>6}", "total", "", registry.total_required());
}

fn print_event(event: &RunEvent<'_>) {
    match event {
        RunEvent::Generating { category, count, .. } => {
            println!("Generating {} tests for {}...", count, category);
        }
        RunEvent::Appended { count, target, .. } => {
            println!("  Added {} tests to {}", count, target.display());
        }
        RunEvent::Missing { target, .. } => {
            println!("  Warning: {} not found", target.display());
        }
        RunEvent::Preview { target, block, .. } => {
            println!("  Dry run: would append to {}", target.display());
            print!("{}", delimited(block));
        }
    }
}

fn write_report(path: &Path, report: &GenerationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    stubforge_utils::logging::basic_config(Some(cli.log_level))?;

    let config = build_config(&cli)?;
    let registry = CategoryRegistry::from_config(&config)?;

    if cli.list {
        print_registry(&registry);
        return Ok(());
    }

    tracing::debug!(base_dir = %registry.base_dir().display(), dry_run = cli.dry_run, "starting run");

    let options = RunOptions {
        dry_run: cli.dry_run,
        only: cli.only.clone(),
    };
    let mut engine = GenerationEngine::new(registry, FsSink).with_options(options);
    let report = engine.run_with(print_event).context("test generation failed")?;

    if let Some(path) = &cli.report {
        write_report(path, &report)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("ufunc=10"), Ok((Category::Ufunc, 10)));
        assert_eq!(parse_count(" dtype = 0 "), Ok((Category::Dtype, 0)));
        assert!(parse_count("ufunc").is_err());
        assert!(parse_count("fft=3").is_err());
        assert!(parse_count("ufunc=-1").is_err());
    }

    #[test]
    fn test_cli_defaults_match_reference_run() -> Result<()> {
        let cli = Cli::try_parse_from(["stubforge"])?;
        assert!(!cli.dry_run);
        assert!(cli.only.is_empty());
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert_eq!(build_config(&cli)?, GeneratorConfig::default());
        Ok(())
    }

    #[test]
    fn test_flags_override_config() -> Result<()> {
        let cli = Cli::try_parse_from([
            "stubforge",
            "--base-dir",
            "elsewhere",
            "--count",
            "linalg=4",
            "--continue-numbering",
            "--only",
            "linalg",
        ])?;
        let config = build_config(&cli)?;

        assert_eq!(config.base_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.numbering, NumberingMode::ContinueFromFile);
        assert_eq!(config.settings(Category::Linalg).map(|s| s.count), Some(4));
        assert_eq!(cli.only, vec![Category::Linalg]);
        Ok(())
    }
}
