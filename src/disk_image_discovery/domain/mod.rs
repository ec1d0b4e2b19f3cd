pub mod archive_entry;
pub mod extractor_info;
pub mod inventory_record;

pub use archive_entry::{ArchiveEntry, EntryType};
pub use extractor_info::{ExtractorInfo, Requirements};
pub use inventory_record::{InventoryRecord, PackageType, DISK_IMAGE_KIND};
