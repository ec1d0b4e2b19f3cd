//! ova-scan - disk image inventory for OVA appliances
//!
//! This library finds the virtual disk images (`.vmdk`, `.vdi`, `.vhd`,
//! `.vhdx`, `.qcow`, `.qcow2`, `.qcow3`) stored inside OVA archives and
//! reports them as inventory records, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`disk_image_discovery`): Pure classification logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and report read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Errors, cancellation and security checks
//!
//! # Example
//!
//! ```no_run
//! use ova_scan::prelude::*;
//! use std::fs::File;
//!
//! # fn main() -> Result<()> {
//! let use_case = ScanArchiveUseCase::new(TarArchiveFormat::new(), StderrProgressReporter::new());
//!
//! let request = ScanRequest::new("appliance.ova", File::open("appliance.ova")?);
//! let response = use_case.execute(request, &ScanContext::new())?;
//!
//! for record in &response.records {
//!     println!("{}", record.locations()[0]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod disk_image_discovery;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::TarArchiveFormat;
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        BatchScanRequest, OutputFormat, ScanDisposition, ScanRequest, ScanResponse,
    };
    pub use crate::application::read_models::{ArchiveStatus, InventoryReport};
    pub use crate::application::use_cases::{ScanArchiveUseCase, ScanBatchUseCase};
    pub use crate::disk_image_discovery::domain::{
        ArchiveEntry, EntryType, ExtractorInfo, InventoryRecord, PackageType, Requirements,
    };
    pub use crate::disk_image_discovery::services::{EligibilityFilter, EntryClassifier};
    pub use crate::ports::inbound::DiskImageExtractionPort;
    pub use crate::ports::outbound::{
        ArchiveFormat, ArchiveSource, ArchiveWalker, InventoryFormatter, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, ScanError};
    pub use crate::shared::{Result, ScanContext, ScanOutcome};
}
