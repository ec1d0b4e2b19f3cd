use crate::application::dto::{ScanRequest, ScanResponse};
use crate::disk_image_discovery::domain::{ExtractorInfo, InventoryRecord};
use crate::disk_image_discovery::services::{EligibilityFilter, EntryClassifier, FormatSniffer};
use crate::ports::inbound::DiskImageExtractionPort;
use crate::ports::outbound::{ArchiveFormat, ProgressReporter};
use crate::shared::error::ScanError;
use crate::shared::{ScanContext, ScanOutcome};
use std::io::Read;


/// Records found in a walked archive together with the number of entries visited
type WalkSummary = (Vec<InventoryRecord>, usize);

/// ScanArchiveUseCase - Core use case for OVA disk image discovery
///
/// Runs one archive through eligibility, format sniffing, entry walking and
/// classification. Skipped inputs are ordinary `Ok` responses; only read
/// failures, malformed archives and cancellation are errors, and an error
/// never carries the records collected before it.
///
/// # Type Parameters
/// * `AF` - ArchiveFormat implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanArchiveUseCase<AF, PR> {
    archive_format: AF,
    progress_reporter: PR,
}

impl<AF, PR> ScanArchiveUseCase<AF, PR>
where
    AF: ArchiveFormat,
    PR: ProgressReporter,
{
    /// Creates a new ScanArchiveUseCase with injected dependencies
    pub fn new(archive_format: AF, progress_reporter: PR) -> Self {
        Self {
            archive_format,
            progress_reporter,
        }
    }

    /// Executes the scan for a single archive
    ///
    /// # Arguments
    /// * `request` - Logical path and byte source of the archive
    /// * `ctx` - Cancellation signal, polled between archive entries
    ///
    /// # Returns
    /// ScanResponse with the disk image records in archive order
    pub fn execute<R: Read>(
        &self,
        request: ScanRequest<R>,
        ctx: &ScanContext,
    ) -> ScanOutcome<ScanResponse> {
        let ScanRequest { path, mut reader } = request;

        // Step 1: Path guard, before any byte is read
        if !EligibilityFilter::is_eligible(&path) {
            self.progress_reporter
                .report(&format!("⏭️  Skipping {}: not an .ova file", path));
            return Ok(ScanResponse::not_eligible());
        }

        // Step 2: Buffer the whole archive
        let content = self.read_content(&path, &mut reader)?;

        // Step 3: Sniff the tar magic
        if !FormatSniffer::looks_like_tar(&content) {
            self.progress_reporter
                .report(&format!("⏭️  Skipping {}: not a tar archive", path));
            return Ok(ScanResponse::not_recognized());
        }

        // Step 4: Walk entries and classify
        let (records, entries) = self.walk_archive(&path, &content, ctx)?;

        self.progress_reporter.report_completion(&format!(
            "✅ {}: {} disk image(s) in {} entr{}",
            path,
            records.len(),
            entries,
            if entries == 1 { "y" } else { "ies" }
        ));

        Ok(ScanResponse::scanned(records, entries))
    }

    fn read_content<R: Read>(&self, path: &str, reader: &mut R) -> ScanOutcome<Vec<u8>> {
        self.progress_reporter
            .report(&format!("📦 Reading archive: {}", path));

        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(|e| ScanError::Read {
                path: path.to_string(),
                details: e.to_string(),
            })?;
        Ok(content)
    }

    /// Walks every entry of a sniffed tar buffer
    ///
    /// The cancellation signal is checked before each entry is pulled.
    fn walk_archive(
        &self,
        path: &str,
        content: &[u8],
        ctx: &ScanContext,
    ) -> ScanOutcome<WalkSummary> {
        let mut walker = self.archive_format.open(path, content);
        let mut entries = walker.entries()?;
        let mut records = Vec::new();
        let mut visited = 0;

        loop {
            Self::ensure_not_cancelled(path, ctx)?;

            let Some(entry) = entries.next() else {
                break;
            };
            let entry = entry?;
            visited += 1;

            if let Some(record) = EntryClassifier::classify(path, &entry) {
                self.progress_reporter.report(&format!(
                    "   💿 Found disk image: {}",
                    record.locations()[0]
                ));
                records.push(record);
            }
        }

        Ok((records, visited))
    }

    fn ensure_not_cancelled(path: &str, ctx: &ScanContext) -> ScanOutcome<()> {
        match ctx.cancel_reason() {
            Some(reason) => Err(ScanError::Cancelled {
                path: path.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl<AF, PR> DiskImageExtractionPort for ScanArchiveUseCase<AF, PR>
where
    AF: ArchiveFormat,
    PR: ProgressReporter,
{
    fn info(&self) -> ExtractorInfo {
        ExtractorInfo::OVA
    }

    fn file_required(&self, path: &str) -> bool {
        EligibilityFilter::is_eligible(path)
    }

    fn extract<R: Read>(
        &self,
        request: ScanRequest<R>,
        ctx: &ScanContext,
    ) -> ScanOutcome<ScanResponse> {
        self.execute(request, ctx)
    }
}
