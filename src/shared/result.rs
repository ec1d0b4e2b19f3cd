use crate::shared::error::ScanError;

/// Type alias for Result with anyhow::Error as the error type.
/// This provides a consistent error handling pattern across the host layers.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Result of a single archive scan.
///
/// The scan core keeps a typed error so callers can tell a cancelled scan
/// from a corrupt archive without downcasting.
pub type ScanOutcome<T> = std::result::Result<T, ScanError>;
