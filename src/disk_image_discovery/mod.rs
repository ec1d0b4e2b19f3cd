//! Disk image discovery domain: pure logic for recognising OVA archives and
//! the disk images packed inside them. No I/O happens in this module.
pub mod domain;
pub mod policies;
pub mod services;
