use crate::disk_image_discovery::domain::{ArchiveEntry, EntryType};
use crate::ports::outbound::{ArchiveEntries, ArchiveFormat, ArchiveWalker};
use crate::shared::error::ScanError;
use crate::shared::ScanOutcome;
use std::io;

/// Typeflag byte of pre-POSIX regular files
const OLD_REGULAR_TYPEFLAG: u8 = b'\0';

/// TarArchiveFormat adapter for ustar, GNU and PAX tar streams
///
/// This adapter implements the ArchiveFormat port on top of `tar::Archive`.
/// Long names from GNU `L` records and PAX `path` records are resolved by
/// the `tar` crate before entries are handed out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TarArchiveFormat;

impl TarArchiveFormat {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveFormat for TarArchiveFormat {
    fn open<'a>(&self, archive_path: &str, content: &'a [u8]) -> Box<dyn ArchiveWalker + 'a> {
        Box::new(TarWalker {
            archive_path: archive_path.to_string(),
            archive: tar::Archive::new(content),
        })
    }
}

/// Single pass over an in-memory tar stream.
///
/// Reads through a plain byte slice, so unread entry bodies are skipped by
/// reading past them and a short body surfaces as an error.
struct TarWalker<'a> {
    archive_path: String,
    archive: tar::Archive<&'a [u8]>,
}

impl ArchiveWalker for TarWalker<'_> {
    fn entries(&mut self) -> ScanOutcome<ArchiveEntries<'_>> {
        let archive_path = self.archive_path.clone();
        let entries = self
            .archive
            .entries()
            .map_err(|e| malformed(&archive_path, &e))?;

        Ok(Box::new(entries.map(move |entry| {
            let entry = entry.map_err(|e| malformed(&archive_path, &e))?;
            Ok(to_archive_entry(&entry))
        })))
    }
}

/// Member names that are not valid UTF-8 have the offending bytes replaced
/// with U+FFFD, so such a location no longer names the member byte for byte.
fn to_archive_entry<R: io::Read>(entry: &tar::Entry<'_, R>) -> ArchiveEntry {
    let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
    let raw_typeflag = entry.header().as_old().linkflag[0];
    let entry_type = classify_entry_type(entry.header().entry_type(), raw_typeflag, &name);
    ArchiveEntry::new(name, entry_type, entry.size())
}

/// Maps a tar typeflag onto the entry kinds classification cares about.
///
/// Old-style archives mark directories as `\0` files with a trailing slash.
fn classify_entry_type(entry_type: tar::EntryType, raw_typeflag: u8, name: &str) -> EntryType {
    if entry_type.is_file() {
        if raw_typeflag == OLD_REGULAR_TYPEFLAG && name.ends_with('/') {
            EntryType::Directory
        } else {
            EntryType::RegularFile
        }
    } else if entry_type.is_dir() {
        EntryType::Directory
    } else if entry_type.is_symlink() {
        EntryType::Symlink
    } else {
        EntryType::Other
    }
}

fn malformed(archive_path: &str, err: &io::Error) -> ScanError {
    ScanError::ArchiveRead {
        path: archive_path.to_string(),
        details: err.to_string(),
    }
}
