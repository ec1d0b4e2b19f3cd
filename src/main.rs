use clap::Parser;
use ova_scan::adapters::outbound::archive::TarArchiveFormat;
use ova_scan::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use ova_scan::adapters::outbound::filesystem::FileSystemReader;
use ova_scan::application::dto::{BatchScanRequest, OutputFormat};
use ova_scan::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use ova_scan::application::use_cases::{ScanArchiveUseCase, ScanBatchUseCase};
use ova_scan::cli::Args;
use ova_scan::config::{self, ConfigFile};
use ova_scan::ports::outbound::ProgressReporter;
use ova_scan::shared::error::ExitCode;
use ova_scan::shared::security::DEFAULT_MAX_FILE_SIZE;
use ova_scan::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use std::time::Duration;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through the same path
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    timeout: Option<Duration>,
    max_file_size: u64,
}

/// CLI flags win over the config file, which wins over defaults
fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Settings {
    let format = args
        .format
        .or_else(|| config.and_then(ConfigFile::output_format))
        .unwrap_or_default();
    let timeout_secs = args.timeout.or_else(|| config.and_then(|c| c.timeout_secs));
    let max_file_size = config
        .and_then(|c| c.max_file_size)
        .unwrap_or(DEFAULT_MAX_FILE_SIZE);

    Settings {
        format,
        timeout: timeout_secs.map(Duration::from_secs),
        max_file_size,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let progress_reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgressReporter::new())
    } else {
        Box::new(StderrProgressReporter::new())
    };
    let reporter = progress_reporter.as_ref();
    let archive_source = FileSystemReader::new().with_max_file_size(settings.max_file_size);
    let extractor = ScanArchiveUseCase::new(TarArchiveFormat::new(), reporter);

    let use_case = ScanBatchUseCase::new(archive_source, extractor, reporter);
    let report = use_case.execute(BatchScanRequest::new(args.paths, settings.timeout));

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(if report.has_failures() {
        ExitCode::ScanFailures
    } else {
        ExitCode::Success
    })
}
