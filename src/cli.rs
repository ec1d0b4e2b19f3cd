use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Inventory virtual disk images packed inside OVA appliances
#[derive(Parser, Debug)]
#[command(name = "ova-scan")]
#[command(version)]
#[command(
    about = "Inventory virtual disk images packed inside OVA appliances",
    long_about = None
)]
pub struct Args {
    /// Files to scan; only those ending in .ova are opened
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./ova-scan.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Deadline for each archive, in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}
