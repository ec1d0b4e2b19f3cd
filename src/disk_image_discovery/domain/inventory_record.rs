/// Kind assigned to every placeholder record this extractor emits
pub const DISK_IMAGE_KIND: &str = "disk-image";

/// Package type of an inventory record
///
/// Disk images have no ecosystem of their own, so they are always generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageType {
    Generic,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Generic => "generic",
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder inventory entry pointing at a disk image inside an archive.
///
/// Downstream extractors pick these up and open the referenced image.
/// Locations are UTF-8: a member name with invalid bytes is carried with
/// U+FFFD in their place and will not resolve back to the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    kind: &'static str,
    package_type: PackageType,
    locations: Vec<String>,
}

impl InventoryRecord {
    /// Builds a disk image record for a fully composed location
    pub fn disk_image(location: String) -> Self {
        Self {
            kind: DISK_IMAGE_KIND,
            package_type: PackageType::Generic,
            locations: vec![location],
        }
    }

    pub fn kind(&self) -> &str {
        self.kind
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}
