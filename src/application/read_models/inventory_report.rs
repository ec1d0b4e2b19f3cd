use super::archive_view::{ArchiveStatus, ArchiveView};

/// View of the report header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadataView {
    pub extractor_name: String,
    pub extractor_version: u32,
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
}

/// Report over every archive handled in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    pub metadata: ReportMetadataView,
    pub archives: Vec<ArchiveView>,
}

impl InventoryReport {
    /// Total number of disk image records across all archives
    pub fn record_count(&self) -> usize {
        self.archives.iter().map(|a| a.records.len()).sum()
    }

    pub fn count_with_status(&self, status: ArchiveStatus) -> usize {
        self.archives.iter().filter(|a| a.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.count_with_status(ArchiveStatus::Failed) > 0
    }
}
