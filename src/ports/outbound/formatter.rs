use crate::application::read_models::InventoryReport;
use crate::shared::Result;

/// InventoryFormatter port for rendering scan reports
///
/// This port abstracts the formatting logic for different report formats
/// (JSON, Markdown).
pub trait InventoryFormatter {
    /// Formats the report for every scanned archive
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, report: &InventoryReport) -> Result<String>;
}
