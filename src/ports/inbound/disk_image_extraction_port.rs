use crate::application::dto::{ScanRequest, ScanResponse};
use crate::disk_image_discovery::domain::{ExtractorInfo, Requirements};
use crate::shared::{ScanContext, ScanOutcome};
use std::io::Read;

/// DiskImageExtractionPort - Inbound port for the OVA disk image extractor
///
/// This is the surface an inventory pipeline drives: it asks whether a file
/// is wanted, then hands over its bytes for extraction.
pub trait DiskImageExtractionPort {
    /// Name and version under which the extractor is registered
    fn info(&self) -> ExtractorInfo;

    fn name(&self) -> &'static str {
        self.info().name
    }

    fn version(&self) -> u32 {
        self.info().version
    }

    fn requirements(&self) -> Requirements {
        self.info().requirements
    }

    /// Returns true if the file at `path` should be handed to [`extract`]
    ///
    /// Decided from the path alone; no I/O is performed.
    ///
    /// [`extract`]: DiskImageExtractionPort::extract
    fn file_required(&self, path: &str) -> bool;

    /// Scans one archive and returns the disk images it contains
    ///
    /// # Errors
    /// Returns an error if:
    /// - The byte source cannot be read to the end
    /// - The archive has a tar header but its entries are malformed
    /// - The context is cancelled or its deadline passes mid-scan
    fn extract<R: Read>(
        &self,
        request: ScanRequest<R>,
        ctx: &ScanContext,
    ) -> ScanOutcome<ScanResponse>;
}
