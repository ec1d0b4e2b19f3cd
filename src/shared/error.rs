use crate::shared::cancellation::CancelReason;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every archive was scanned or skipped cleanly
    Success = 0,
    /// At least one archive could not be read, was malformed, or timed out
    ScanFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, output error, invalid input path, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ScanFailures => write!(f, "Scan Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Hard failures of a single archive scan.
///
/// "Not applicable" outcomes (wrong extension, not a tar stream) are not
/// errors and never appear here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read archive: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is readable and was not modified during the scan")]
    Read { path: String, details: String },

    #[error("Malformed archive: {path}\nDetails: {details}\n\n💡 Hint: The file has a tar header but its entries are truncated or corrupt")]
    ArchiveRead { path: String, details: String },

    #[error("Scan cancelled: {path}\nReason: {reason}")]
    Cancelled { path: String, reason: CancelReason },
}

impl ScanError {
    /// Path of the archive the failure belongs to
    pub fn path(&self) -> &str {
        match self {
            ScanError::Read { path, .. }
            | ScanError::ArchiveRead { path, .. }
            | ScanError::Cancelled { path, .. } => path,
        }
    }

    /// Short machine-readable name used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::Read { .. } => "read-error",
            ScanError::ArchiveRead { .. } => "archive-read-error",
            ScanError::Cancelled { .. } => "cancelled",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScanError::Cancelled { .. })
    }
}

/// Host-side errors raised around the scan core (input files, output, config).
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Invalid input path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing .ova file")]
    InvalidInputPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for builder patterns and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
