use crate::disk_image_discovery::domain::InventoryRecord;

/// Outcome of one archive as shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStatus {
    Scanned,
    SkippedNotEligible,
    SkippedNotTar,
    Failed,
}

impl ArchiveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveStatus::Scanned => "scanned",
            ArchiveStatus::SkippedNotEligible => "skipped-not-eligible",
            ArchiveStatus::SkippedNotTar => "skipped-not-tar",
            ArchiveStatus::Failed => "failed",
        }
    }
}

/// View of one inventory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub kind: String,
    pub package_type: String,
    pub locations: Vec<String>,
}

impl From<&InventoryRecord> for RecordView {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            kind: record.kind().to_string(),
            package_type: record.package_type().to_string(),
            locations: record.locations().to_vec(),
        }
    }
}

/// View of a scan failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub kind: String,
    pub message: String,
}

/// View of one scanned (or skipped) archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveView {
    pub path: String,
    pub status: ArchiveStatus,
    pub entries_scanned: Option<usize>,
    pub records: Vec<RecordView>,
    pub error: Option<ErrorView>,
}
