/// Kind of a single archive member, reduced to what classification needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    RegularFile,
    Directory,
    Symlink,
    /// Hard links, devices, FIFOs and anything else
    Other,
}

impl EntryType {
    pub fn is_regular_file(self) -> bool {
        self == EntryType::RegularFile
    }
}

/// Header-level view of one archive member.
///
/// Produced one at a time by an archive walker and dropped once classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    name: String,
    entry_type: EntryType,
    size: u64,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, entry_type: EntryType, size: u64) -> Self {
        Self {
            name: name.into(),
            entry_type,
            size,
        }
    }

    /// Raw path as stored in the archive header
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Declared body length in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}
