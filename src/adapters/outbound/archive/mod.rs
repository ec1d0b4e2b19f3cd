/// Archive format adapters backed by the `tar` crate
mod tar_archive;

pub use tar_archive::TarArchiveFormat;
