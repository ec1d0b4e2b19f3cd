use crate::application::read_models::{
    ArchiveView, ErrorView, InventoryReport, RecordView, ReportMetadataView,
};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    extractor: Extractor,
    tool: Tool,
    generated_at: String,
    archives: Vec<Archive>,
}

#[derive(Debug, Serialize)]
struct Extractor {
    name: String,
    version: u32,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Archive {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries_scanned: Option<usize>,
    records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Error>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    kind: String,
    package_type: String,
    locations: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Error {
    kind: String,
    message: String,
}

/// JsonFormatter adapter for machine-readable inventory reports
///
/// This adapter implements the InventoryFormatter port for JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryFormatter for JsonFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let document = Document {
            extractor: self.build_extractor(&report.metadata),
            tool: Tool {
                name: report.metadata.tool_name.clone(),
                version: report.metadata.tool_version.clone(),
            },
            generated_at: report.metadata.generated_at.clone(),
            archives: report.archives.iter().map(|a| self.build_archive(a)).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_extractor(&self, metadata: &ReportMetadataView) -> Extractor {
        Extractor {
            name: metadata.extractor_name.clone(),
            version: metadata.extractor_version,
        }
    }

    fn build_archive(&self, archive: &ArchiveView) -> Archive {
        Archive {
            path: archive.path.clone(),
            status: archive.status.as_str(),
            entries_scanned: archive.entries_scanned,
            records: archive.records.iter().map(|r| self.build_record(r)).collect(),
            error: archive.error.as_ref().map(|e| self.build_error(e)),
        }
    }

    fn build_record(&self, record: &RecordView) -> Record {
        Record {
            kind: record.kind.clone(),
            package_type: record.package_type.clone(),
            locations: record.locations.clone(),
        }
    }

    fn build_error(&self, error: &ErrorView) -> Error {
        Error {
            kind: error.kind.clone(),
            message: error.message.clone(),
        }
    }
}
