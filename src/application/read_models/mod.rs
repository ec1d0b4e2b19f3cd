//! Read models for report rendering
//!
//! Formatters consume these flattened views instead of the domain types,
//! so adding an output format never touches the scan core.

mod archive_view;
mod inventory_report;
mod inventory_report_builder;

pub use archive_view::{ArchiveStatus, ArchiveView, ErrorView, RecordView};
pub use inventory_report::{InventoryReport, ReportMetadataView};
pub use inventory_report_builder::InventoryReportBuilder;
