use crate::disk_image_discovery::policies::{extension_of, ARCHIVE_EXTENSION};

/// EligibilityFilter service deciding from a path alone whether a file is
/// worth opening
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Returns true when the path's extension is `.ova`, ignoring case
    pub fn is_eligible(path: &str) -> bool {
        extension_of(path).eq_ignore_ascii_case(ARCHIVE_EXTENSION)
    }
}
