/// Use cases module containing application business logic orchestration
mod scan_archive;
mod scan_batch;

pub use scan_archive::ScanArchiveUseCase;
pub use scan_batch::ScanBatchUseCase;
