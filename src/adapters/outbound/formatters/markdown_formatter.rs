use crate::application::read_models::{ArchiveStatus, ArchiveView, InventoryReport};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;

/// Markdown table header for the per-archive summary
const SUMMARY_TABLE_HEADER: &str = "| Archive | Status | Entries | Disk Images |\n";

/// Markdown table separator line for the summary table
const SUMMARY_TABLE_SEPARATOR: &str = "|---------|--------|---------|-------------|\n";

/// Markdown table header for discovered disk images
const RECORD_TABLE_HEADER: &str = "| Location | Kind | Package Type |\n";

/// Markdown table separator line for the disk image table
const RECORD_TABLE_SEPARATOR: &str = "|----------|------|--------------|\n";

/// MarkdownFormatter adapter for human-readable inventory reports
///
/// This adapter implements the InventoryFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &InventoryReport) {
        output.push_str("# Disk Image Inventory\n\n");
        output.push_str(&format!(
            "Generated by {} {} using extractor `{} v{}` at {}.\n\n",
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.extractor_name,
            report.metadata.extractor_version,
            report.metadata.generated_at
        ));
    }

    fn render_summary(&self, output: &mut String, archives: &[ArchiveView]) {
        output.push_str("## Archives\n\n");
        if archives.is_empty() {
            output.push_str("*No files were scanned.*\n\n");
            return;
        }

        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        for archive in archives {
            let entries = archive
                .entries_scanned
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&archive.path),
                archive.status.as_str(),
                entries,
                archive.records.len()
            ));
        }
        output.push('\n');
    }

    fn render_records(&self, output: &mut String, archives: &[ArchiveView]) {
        output.push_str("## Disk Images\n\n");
        let records: Vec<_> = archives.iter().flat_map(|a| a.records.iter()).collect();
        if records.is_empty() {
            output.push_str("*No disk images found.*\n\n");
            return;
        }

        output.push_str(RECORD_TABLE_HEADER);
        output.push_str(RECORD_TABLE_SEPARATOR);
        for record in records {
            for location in &record.locations {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(location),
                    record.kind,
                    record.package_type
                ));
            }
        }
        output.push('\n');
    }

    fn render_failures(&self, output: &mut String, archives: &[ArchiveView]) {
        let failed: Vec<&ArchiveView> = archives
            .iter()
            .filter(|a| a.status == ArchiveStatus::Failed)
            .collect();
        if failed.is_empty() {
            return;
        }

        output.push_str("## Failures\n\n");
        for archive in failed {
            if let Some(error) = &archive.error {
                let first_line = error.message.lines().next().unwrap_or_default();
                output.push_str(&format!(
                    "- `{}` ({}): {}\n",
                    archive.path, error.kind, first_line
                ));
            }
        }
        output.push('\n');
    }
}

impl InventoryFormatter for MarkdownFormatter {
    fn format(&self, report: &InventoryReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_summary(&mut output, &report.archives);
        self.render_records(&mut output, &report.archives);
        self.render_failures(&mut output, &report.archives);
        Ok(output)
    }
}
