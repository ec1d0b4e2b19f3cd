use crate::ports::outbound::ArchiveSource;
use crate::shared::error::HostError;
use crate::shared::security::{validate_file_size, validate_regular_file, DEFAULT_MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// FileSystemReader adapter for opening archives on the local file system
///
/// This adapter implements the ArchiveSource port. Before a file is opened
/// it must exist, must not be a symbolic link, must be a regular file and
/// must not exceed the configured size limit.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Overrides the largest archive size accepted, in bytes
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveSource for FileSystemReader {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>> {
        if !path.exists() && path.symlink_metadata().is_err() {
            return Err(HostError::InvalidInputPath {
                path: path.to_path_buf(),
                reason: "File does not exist".to_string(),
            }
            .into());
        }

        let metadata = validate_regular_file(path, "archive")?;
        validate_file_size(metadata.len(), path, self.max_file_size)?;

        let file = File::open(path).map_err(|e| HostError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
