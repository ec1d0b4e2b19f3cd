use super::PathNormalizer;
use crate::disk_image_discovery::domain::{ArchiveEntry, InventoryRecord};
use crate::disk_image_discovery::policies::{extension_of, is_disk_image_extension};

/// EntryClassifier service turning archive members into inventory records
///
/// Only regular files whose cleaned name carries a disk image extension
/// produce a record. Each entry is judged on its own; duplicates are kept.
pub struct EntryClassifier;

impl EntryClassifier {
    /// Classifies one archive member found in the archive at `archive_path`.
    ///
    /// # Returns
    /// `Some(record)` located at `<archive_path>/<cleaned name>` when the
    /// entry is a disk image, `None` otherwise
    pub fn classify(archive_path: &str, entry: &ArchiveEntry) -> Option<InventoryRecord> {
        if !entry.entry_type().is_regular_file() {
            return None;
        }

        let cleaned = PathNormalizer::clean_entry_name(entry.name());
        if !is_disk_image_extension(extension_of(&cleaned)) {
            return None;
        }

        let location = PathNormalizer::compose_location(archive_path, &cleaned);
        Some(InventoryRecord::disk_image(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk_image_discovery::domain::{EntryType, PackageType};

    fn regular(name: &str) -> ArchiveEntry {
        ArchiveEntry::new(name, EntryType::RegularFile, 24)
    }

    #[test]
    fn test_classify_every_disk_format() {
        for name in [
            "test-disk.qcow",
            "test-disk.qcow2",
            "test-disk.qcow3",
            "test-disk.vmdk",
            "test-disk.vdi",
            "test-disk.vhd",
            "test-disk.vhdx",
        ] {
            let record = EntryClassifier::classify("test.ova", &regular(name))
                .unwrap_or_else(|| panic!("{} should be classified", name));
            assert_eq!(record.kind(), "disk-image");
            assert_eq!(record.package_type(), PackageType::Generic);
            assert_eq!(record.locations(), [format!("test.ova/{}", name)]);
        }
    }

    #[test]
    fn test_classify_uppercase_extension() {
        let record = EntryClassifier::classify("test.ova", &regular("DISK1.VMDK")).unwrap();
        assert_eq!(record.locations(), ["test.ova/DISK1.VMDK".to_string()]);
    }

    #[test]
    fn test_classify_skips_non_disk_files() {
        for name in ["readme.txt", "appliance.ovf", "appliance.mf", "disk.vmdk.bak"] {
            assert!(EntryClassifier::classify("test.ova", &regular(name)).is_none());
        }
    }

    #[test]
    fn test_classify_skips_non_regular_entries() {
        for entry_type in [EntryType::Directory, EntryType::Symlink, EntryType::Other] {
            let entry = ArchiveEntry::new("disk.vmdk", entry_type, 0);
            assert!(EntryClassifier::classify("test.ova", &entry).is_none());
        }
        let dir = ArchiveEntry::new("sub/", EntryType::Directory, 0);
        assert!(EntryClassifier::classify("test.ova", &dir).is_none());
    }

    #[test]
    fn test_classify_cleans_traversal() {
        let record =
            EntryClassifier::classify("test.ova", &regular("../../escape.vmdk")).unwrap();
        assert_eq!(record.locations(), ["test.ova/escape.vmdk".to_string()]);
        assert!(!record.locations()[0].contains(".."));
    }

    #[test]
    fn test_classify_nested_entry() {
        let record =
            EntryClassifier::classify("vms/app.ova", &regular("./disks//system.qcow2")).unwrap();
        assert_eq!(
            record.locations(),
            ["vms/app.ova/disks/system.qcow2".to_string()]
        );
    }
}
