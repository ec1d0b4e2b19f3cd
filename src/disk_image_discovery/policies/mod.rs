pub mod file_extensions;

pub use file_extensions::{
    extension_of, is_disk_image_extension, ARCHIVE_EXTENSION, DISK_IMAGE_EXTENSIONS,
};
