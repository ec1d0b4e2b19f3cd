use crate::disk_image_discovery::domain::InventoryRecord;

/// How a scan ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDisposition {
    /// The path does not carry the `.ova` extension; nothing was read
    NotEligible,
    /// The content is not a tar stream
    NotRecognizedFormat,
    /// The archive was walked to its end
    Scanned {
        /// Number of archive members visited
        entries: usize,
    },
}

/// ScanResponse - records found in one archive
///
/// Records keep archive order. Skipped inputs always carry no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResponse {
    pub records: Vec<InventoryRecord>,
    pub disposition: ScanDisposition,
}

impl ScanResponse {
    pub fn not_eligible() -> Self {
        Self {
            records: Vec::new(),
            disposition: ScanDisposition::NotEligible,
        }
    }

    pub fn not_recognized() -> Self {
        Self {
            records: Vec::new(),
            disposition: ScanDisposition::NotRecognizedFormat,
        }
    }

    pub fn scanned(records: Vec<InventoryRecord>, entries: usize) -> Self {
        Self {
            records,
            disposition: ScanDisposition::Scanned { entries },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_responses_are_empty() {
        assert!(ScanResponse::not_eligible().is_empty());
        assert!(ScanResponse::not_recognized().is_empty());
        assert_eq!(
            ScanResponse::not_eligible().disposition,
            ScanDisposition::NotEligible
        );
        assert_eq!(
            ScanResponse::not_recognized().disposition,
            ScanDisposition::NotRecognizedFormat
        );
    }

    #[test]
    fn test_scanned_response() {
        let records = vec![InventoryRecord::disk_image("a.ova/disk.vmdk".to_string())];
        let response = ScanResponse::scanned(records.clone(), 3);
        assert_eq!(response.records, records);
        assert_eq!(response.disposition, ScanDisposition::Scanned { entries: 3 });
        assert!(!response.is_empty());
    }
}
