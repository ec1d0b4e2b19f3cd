use super::archive_view::{ArchiveStatus, ArchiveView, ErrorView, RecordView};
use super::inventory_report::{InventoryReport, ReportMetadataView};
use crate::application::dto::{ScanDisposition, ScanResponse};
use crate::disk_image_discovery::domain::ExtractorInfo;
use crate::shared::ScanOutcome;
use chrono::Utc;

/// Builder collecting per-archive outcomes into an [`InventoryReport`]
///
/// Archives appear in the order their outcomes were added.
pub struct InventoryReportBuilder {
    extractor: ExtractorInfo,
    archives: Vec<ArchiveView>,
}

impl InventoryReportBuilder {
    pub fn new(extractor: ExtractorInfo) -> Self {
        Self {
            extractor,
            archives: Vec::new(),
        }
    }

    /// Adds the outcome of scanning the archive at `path`
    ///
    /// A failed scan contributes no records, only the error.
    pub fn add_outcome(&mut self, path: impl Into<String>, outcome: ScanOutcome<ScanResponse>) {
        let path = path.into();
        let view = match outcome {
            Ok(response) => Self::build_success_view(path, response),
            Err(err) => ArchiveView {
                path,
                status: ArchiveStatus::Failed,
                entries_scanned: None,
                records: Vec::new(),
                error: Some(ErrorView {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }),
            },
        };
        self.archives.push(view);
    }

    fn build_success_view(path: String, response: ScanResponse) -> ArchiveView {
        let (status, entries_scanned) = match response.disposition {
            ScanDisposition::NotEligible => (ArchiveStatus::SkippedNotEligible, None),
            ScanDisposition::NotRecognizedFormat => (ArchiveStatus::SkippedNotTar, None),
            ScanDisposition::Scanned { entries } => (ArchiveStatus::Scanned, Some(entries)),
        };
        ArchiveView {
            path,
            status,
            entries_scanned,
            records: response.records.iter().map(RecordView::from).collect(),
            error: None,
        }
    }

    /// Stamps the report with the current time and the tool version
    pub fn build(self) -> InventoryReport {
        InventoryReport {
            metadata: ReportMetadataView {
                extractor_name: self.extractor.name.to_string(),
                extractor_version: self.extractor.version,
                tool_name: env!("CARGO_PKG_NAME").to_string(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: Utc::now().to_rfc3339(),
            },
            archives: self.archives,
        }
    }
}
