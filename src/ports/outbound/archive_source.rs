use crate::shared::Result;
use std::io::Read;
use std::path::Path;

/// ArchiveSource port for opening candidate archives
///
/// The scan core never opens files itself; the host uses this port to turn
/// a path into a byte stream.
pub trait ArchiveSource {
    /// Opens the file at `path` for reading
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// exceeds the configured size limit, or cannot be opened
    fn open(&self, path: &Path) -> Result<Box<dyn Read>>;
}

impl<T: ArchiveSource + ?Sized> ArchiveSource for &T {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>> {
        (**self).open(path)
    }
}
