/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod disk_image_extraction_port;

pub use disk_image_extraction_port::DiskImageExtractionPort;
