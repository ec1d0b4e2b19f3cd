use crate::disk_image_discovery::domain::ArchiveEntry;
use crate::shared::ScanOutcome;

/// Lazy sequence of archive members.
///
/// Finite and not restartable. Ends with `None` at end-of-archive; a
/// malformed archive yields a single `Err` item.
pub type ArchiveEntries<'a> = Box<dyn Iterator<Item = ScanOutcome<ArchiveEntry>> + 'a>;

/// ArchiveWalker port: one pass over an opened archive
pub trait ArchiveWalker {
    /// Starts walking the archive from its first header
    ///
    /// # Errors
    /// Returns `ScanError::ArchiveRead` if the archive cannot be iterated at all
    fn entries(&mut self) -> ScanOutcome<ArchiveEntries<'_>>;
}

/// ArchiveFormat port: opens an in-memory archive for walking
///
/// `archive_path` is only used to label errors.
pub trait ArchiveFormat {
    fn open<'a>(&self, archive_path: &str, content: &'a [u8]) -> Box<dyn ArchiveWalker + 'a>;
}
