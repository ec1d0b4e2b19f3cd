/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results back out to the
/// adapters, keeping the domain layer isolated.
mod batch_scan_request;
mod output_format;
mod scan_request;
mod scan_response;

pub use batch_scan_request::BatchScanRequest;
pub use output_format::OutputFormat;
pub use scan_request::ScanRequest;
pub use scan_response::{ScanDisposition, ScanResponse};
