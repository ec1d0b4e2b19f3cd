/// Extension an input file must carry to be opened at all
pub const ARCHIVE_EXTENSION: &str = ".ova";

/// Disk image formats recognised inside an OVA archive (lowercase, with dot)
pub const DISK_IMAGE_EXTENSIONS: [&str; 7] = [
    ".vdi", ".vmdk", ".vhd", ".vhdx", ".qcow", ".qcow2", ".qcow3",
];

/// Returns the extension of the last path segment, including the leading dot.
///
/// Only `/` separates segments. Returns an empty string when the last
/// segment has no dot. A dot-file such as `.vmdk` is all extension.
pub fn extension_of(path: &str) -> &str {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => &path[segment_start + dot..],
        None => "",
    }
}

/// Case-insensitive membership test against [`DISK_IMAGE_EXTENSIONS`]
pub fn is_disk_image_extension(extension: &str) -> bool {
    let lowered = extension.to_ascii_lowercase();
    DISK_IMAGE_EXTENSIONS.contains(&lowered.as_str())
}
