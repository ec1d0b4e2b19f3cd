use crate::application::dto::{BatchScanRequest, ScanRequest, ScanResponse};
use crate::application::read_models::{ArchiveStatus, InventoryReport, InventoryReportBuilder};
use crate::ports::inbound::DiskImageExtractionPort;
use crate::ports::outbound::{ArchiveSource, ProgressReporter};
use crate::shared::error::ScanError;
use crate::shared::{ScanContext, ScanOutcome};
use std::path::Path;

/// ScanBatchUseCase - Runs the OVA extractor over a list of host files
///
/// Each path is handled independently: a failure on one archive is recorded
/// in the report and the run moves on to the next path.
///
/// # Type Parameters
/// * `S` - ArchiveSource implementation
/// * `E` - DiskImageExtractionPort implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanBatchUseCase<S, E, PR> {
    archive_source: S,
    extractor: E,
    progress_reporter: PR,
}

impl<S, E, PR> ScanBatchUseCase<S, E, PR>
where
    S: ArchiveSource,
    E: DiskImageExtractionPort,
    PR: ProgressReporter,
{
    pub fn new(archive_source: S, extractor: E, progress_reporter: PR) -> Self {
        Self {
            archive_source,
            extractor,
            progress_reporter,
        }
    }

    /// Scans every path of the request and collects the outcomes
    ///
    /// Per-archive errors never abort the run; they end up in the report.
    pub fn execute(&self, request: BatchScanRequest) -> InventoryReport {
        let mut builder = InventoryReportBuilder::new(self.extractor.info());
        let total = request.paths.len();

        for (index, path) in request.paths.iter().enumerate() {
            let display_path = path.to_string_lossy().into_owned();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&display_path));

            let outcome = self.scan_one(path, &display_path, &request.archive_context());
            if let Err(err) = &outcome {
                self.progress_reporter
                    .report_error(&format!("{}: {}", err.kind(), err));
            }
            builder.add_outcome(display_path, outcome);
        }

        let report = builder.build();
        self.progress_reporter.report_completion(&format!(
            "Scanned {} file(s): {} disk image(s), {} skipped, {} failed",
            total,
            report.record_count(),
            report.count_with_status(ArchiveStatus::SkippedNotEligible)
                + report.count_with_status(ArchiveStatus::SkippedNotTar),
            report.count_with_status(ArchiveStatus::Failed),
        ));
        report
    }

    fn scan_one(
        &self,
        path: &Path,
        display_path: &str,
        ctx: &ScanContext,
    ) -> ScanOutcome<ScanResponse> {
        // Ineligible files are never opened
        if !self.extractor.file_required(display_path) {
            return Ok(ScanResponse::not_eligible());
        }

        let reader = self
            .archive_source
            .open(path)
            .map_err(|e| ScanError::Read {
                path: display_path.to_string(),
                details: format!("{:#}", e),
            })?;

        self.extractor
            .extract(ScanRequest::new(display_path, reader), ctx)
    }
}
