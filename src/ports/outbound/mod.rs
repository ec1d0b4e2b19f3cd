/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (archive formats, file system, console).
pub mod archive_source;
pub mod archive_walker;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use archive_source::ArchiveSource;
pub use archive_walker::{ArchiveEntries, ArchiveFormat, ArchiveWalker};
pub use formatter::InventoryFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
