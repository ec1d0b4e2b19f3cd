/// Mock implementations for testing
mod mock_archive_source;
mod mock_progress_reporter;

pub use mock_archive_source::MockArchiveSource;
pub use mock_progress_reporter::MockProgressReporter;
